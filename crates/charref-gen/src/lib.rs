//! Character reference table generator: orchestrates the full pipeline.
//!
//! ```text
//! C1 replacement text ──► C1TableBuilder ─────┐
//!                                              ├─► Emitter → Rust source
//! data/entities.json ──► EntityTableBuilder ──┘
//! ```
//!
//! The two tables are built independently. Nothing is rendered until both
//! have been built, so a failure never yields partial output.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use charref_codegen::Provenance;
use charref_tables::{build_entity_table, C1Table, EntityTable, Registry};
use charref_types::{Result, TableError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

/// Location of the registry document under the source root.
pub const REGISTRY_PATH: &str = "data/entities.json";

/// Everything produced by one successful run.
#[derive(Debug, Clone)]
pub struct GeneratedTables {
    /// The rendered Rust source.
    pub source: String,
    /// Lowercase hex SHA-256 of the registry document.
    pub registry_sha256: String,
    pub c1: C1Table,
    pub entities: EntityTable,
}

/// Structured outcome of a run, for machine consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_sha256: Option<String>,
    /// Complete references in the entity table.
    pub entity_count: usize,
    /// All entity table keys, prefix placeholders included.
    pub key_count: usize,
    /// Remapped bytes in the C1 table.
    pub c1_entry_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TableError>,
}

impl GenerateResult {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Full path of the registry document under `src_root`.
pub fn registry_path(src_root: &Path) -> PathBuf {
    src_root.join(REGISTRY_PATH)
}

/// Read and parse the registry document, returning it with its digest.
pub fn load_registry(src_root: &Path) -> Result<(Registry, String)> {
    let path = registry_path(src_root);
    let data = std::fs::read(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TableError::MissingInputFile {
            path: path.display().to_string(),
        },
        _ => TableError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })?;

    let digest = format!("{:x}", Sha256::digest(&data));
    debug!(path = %path.display(), bytes = data.len(), sha256 = %digest, "read registry");

    let registry = Registry::from_json(&data)?;
    Ok((registry, digest))
}

/// Build both tables and render them.
pub fn generate(src_root: &Path) -> Result<GeneratedTables> {
    let c1 = C1Table::standard()?;
    let (registry, registry_sha256) = load_registry(src_root)?;
    let entities = build_entity_table(&registry)?;

    let provenance = Provenance {
        registry_sha256: registry_sha256.clone(),
    };
    let source = charref_codegen::emit(&c1, &entities, Some(&provenance));

    info!(
        c1_entries = c1.len(),
        entities = entities.complete_count(),
        keys = entities.len(),
        "generated character reference tables"
    );
    Ok(GeneratedTables {
        source,
        registry_sha256,
        c1,
        entities,
    })
}

/// Run [`generate`] and fold the outcome into a [`GenerateResult`].
pub fn generate_to_result(src_root: &Path) -> GenerateResult {
    match generate(src_root) {
        Ok(tables) => GenerateResult {
            success: true,
            entity_count: tables.entities.complete_count(),
            key_count: tables.entities.len(),
            c1_entry_count: tables.c1.len(),
            source: Some(tables.source),
            registry_sha256: Some(tables.registry_sha256),
            error_code: None,
            error: None,
        },
        Err(e) => GenerateResult {
            success: false,
            source: None,
            registry_sha256: None,
            entity_count: 0,
            key_count: 0,
            c1_entry_count: 0,
            error_code: Some(e.code().to_string()),
            error: Some(e),
        },
    }
}
