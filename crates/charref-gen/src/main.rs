//! `charref-gen` binary.
//!
//! Reads `<SRC_DIR>/data/entities.json`, builds the C1 and named entity
//! tables, and writes the generated Rust source to stdout. Diagnostics go to
//! stderr. On any error nothing is written to stdout and the exit status is
//! non-zero.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "charref-gen")]
#[command(about = "Generate HTML character reference lookup tables")]
struct Args {
    /// Root directory containing data/entities.json
    #[arg(value_name = "SRC_DIR")]
    src_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    setup_tracing();

    info!(src_dir = %args.src_dir.display(), "starting charref-gen");

    let tables = match charref_gen::generate(&args.src_dir) {
        Ok(tables) => tables,
        Err(e) => {
            error!(code = %e.code(), category = %e.category(), "table generation failed");
            eprintln!("error[{}]: {e}", e.code());
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout
        .write_all(tables.source.as_bytes())
        .and_then(|()| stdout.flush())
    {
        eprintln!("error: failed to write output: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
