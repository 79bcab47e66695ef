//! Binary invocation tests: exit status and stdout discipline.

use std::fs;
use std::process::{Command, Output};

use charref_gen::REGISTRY_PATH;
use tempfile::TempDir;

fn run(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_charref-gen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn charref-gen")
}

fn source_root(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(REGISTRY_PATH);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    dir
}

#[test]
fn success_writes_source_to_stdout() {
    let root = source_root(r#"{ "&lt;": { "codepoints": [60] } }"#);
    let output = run(&[root.path().as_os_str()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("// THIS FILE IS AUTOGENERATED - DO NOT EDIT\n"));
    assert!(stdout.contains("pub static C1_REPLACEMENTS: [Option<char>; 32] = ["));
    assert!(stdout.contains("    \"lt;\" => ['\\u{00003c}', '\\u{000000}'],"));
}

#[test]
fn missing_registry_fails_without_output() {
    let root = TempDir::new().unwrap();
    let output = run(&[root.path().as_os_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E300]"), "stderr: {stderr}");
}

#[test]
fn invalid_entity_fails_without_output() {
    let root = source_root(r#"{ "&amp;": { "codepoints": [] } }"#);
    let output = run(&[root.path().as_os_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E200]"), "stderr: {stderr}");
}

#[test]
fn source_dir_is_required() {
    let output = run(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn version_flag_is_rejected() {
    let root = source_root(r#"{ "&lt;": { "codepoints": [60] } }"#);
    for flag in ["--version", "-V"] {
        let output = run(&[std::ffi::OsStr::new(flag), root.path().as_os_str()]);
        assert!(!output.status.success(), "{flag} accepted");
        assert!(output.stdout.is_empty(), "{flag} wrote to stdout");
    }
}
