//! Rust source emitter for the character-reference tables.
//!
//! # Output
//!
//! ```text
//! // THIS FILE IS AUTOGENERATED - DO NOT EDIT
//! // registry sha256: <hex>
//!
//! use phf::Map;
//!
//! pub static C1_REPLACEMENTS: [Option<char>; 32] = [ ... ];
//!
//! pub static NAMED_ENTITIES: Map<&'static str, [char; 2]> = phf::phf_map! { ... };
//! ```
//!
//! The C1 table is written in offset order and the entity table in name
//! order, so identical input always produces byte-identical output.

pub mod emit;
pub mod syntax;

pub use emit::{emit, emit_c1_table, emit_entity_table, Provenance};
