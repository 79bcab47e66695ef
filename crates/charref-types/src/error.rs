use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The embedded C1 replacement text.
    SpecText,
    /// The named-entity registry document.
    Registry,
    /// Locating or reading input files.
    Input,
}

/// Numeric error code (E100–E399).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Specification text errors (E100–E199) ──
    pub const MALFORMED_SPEC_LINE: Self = Self(100);

    // ── Registry errors (E200–E299) ──
    pub const INVALID_ENTITY_ARITY: Self = Self(200);
    pub const ZERO_CODEPOINT: Self = Self(201);
    pub const MISSING_MARKER: Self = Self(202);
    pub const INVALID_CODEPOINT: Self = Self(203);
    pub const EMPTY_ENTITY_NAME: Self = Self(204);
    pub const MALFORMED_REGISTRY: Self = Self(205);

    // ── Input errors (E300–E399) ──
    pub const MISSING_INPUT_FILE: Self = Self(300);
    pub const IO: Self = Self(301);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::SpecText,
            200..=299 => ErrorCategory::Registry,
            _ => ErrorCategory::Input,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpecText => write!(f, "spec text"),
            Self::Registry => write!(f, "registry"),
            Self::Input => write!(f, "input"),
        }
    }
}

/// A fatal table-construction error.
///
/// Every variant aborts the whole run. Nothing is emitted once one of these
/// has been produced.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableError {
    /// A C1 replacement line that does not have the `0x.. U+....` shape.
    #[error("line {line}: malformed C1 replacement line `{text}`: {reason}")]
    MalformedSpecLine {
        line: u32,
        text: String,
        reason: String,
    },

    /// An entity with zero or more than two codepoints.
    #[error("entity `{key}` has {count} codepoints, expected 1 or 2")]
    InvalidEntityArity { key: String, count: usize },

    /// An entity with a zero codepoint.
    #[error("entity `{key}` contains a zero codepoint")]
    ZeroCodepoint { key: String },

    /// A registry key without the leading `&`.
    #[error("registry key `{key}` does not start with `&`")]
    MissingMarker { key: String },

    /// A codepoint that is a surrogate or beyond U+10FFFF.
    #[error("entity `{key}` has codepoint {value:#x}, which is not a Unicode scalar value")]
    InvalidCodepoint { key: String, value: u32 },

    /// A registry key consisting only of the marker.
    #[error("registry key `{key}` has an empty entity name")]
    EmptyEntityName { key: String },

    /// Registry JSON that does not match the expected schema.
    #[error("malformed registry document: {message}")]
    MalformedRegistry { message: String },

    /// The registry document does not exist.
    #[error("registry document not found at {path}")]
    MissingInputFile { path: String },

    /// The registry document exists but could not be read.
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl TableError {
    /// The stable numeric code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedSpecLine { .. } => ErrorCode::MALFORMED_SPEC_LINE,
            Self::InvalidEntityArity { .. } => ErrorCode::INVALID_ENTITY_ARITY,
            Self::ZeroCodepoint { .. } => ErrorCode::ZERO_CODEPOINT,
            Self::MissingMarker { .. } => ErrorCode::MISSING_MARKER,
            Self::InvalidCodepoint { .. } => ErrorCode::INVALID_CODEPOINT,
            Self::EmptyEntityName { .. } => ErrorCode::EMPTY_ENTITY_NAME,
            Self::MalformedRegistry { .. } => ErrorCode::MALFORMED_REGISTRY,
            Self::MissingInputFile { .. } => ErrorCode::MISSING_INPUT_FILE,
            Self::Io { .. } => ErrorCode::IO,
        }
    }

    /// The category derived from [`Self::code`].
    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    /// Build a [`TableError::MalformedSpecLine`].
    pub fn malformed_line(line: u32, text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSpecLine {
            line,
            text: text.into(),
            reason: reason.into(),
        }
    }
}
