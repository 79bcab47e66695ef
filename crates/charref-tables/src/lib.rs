//! Table construction for HTML character-reference resolution.
//!
//! Two independent tables are built here:
//!
//! - [`C1Table`]: the 32 replacement codepoints for raw bytes 0x80..=0x9F,
//!   parsed from the embedded [`C1_REPLACEMENTS_SPEC`] text.
//! - [`EntityTable`]: every named character reference from the registry,
//!   plus every proper prefix of every name mapped to a placeholder. That
//!   prefix closure lets a tokenizer match one character at a time and stop
//!   as soon as a prefix is absent.
//!
//! Both are immutable once built.

pub mod c1;
pub mod encoder;
pub mod entities;
pub mod registry;

pub use c1::{build_c1_table, C1Table, C1_REPLACEMENTS_SPEC, C1_TABLE_LEN};
pub use encoder::{decode_char_literal, encode_char_literal};
pub use entities::{build_entity_table, EntityTable, ENTITY_MARKER};
pub use registry::{Registry, RegistryEntry};
