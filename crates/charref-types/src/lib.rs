//! Shared types for the character-reference table generator.
//!
//! This crate defines the codepoint pair stored per entity name and the
//! error types reported by every stage of table construction.

mod codepoints;
mod error;

pub use codepoints::Codepoints;
pub use error::{ErrorCategory, ErrorCode, TableError};

/// Result type used throughout the generator.
pub type Result<T> = std::result::Result<T, TableError>;
