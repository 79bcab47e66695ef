//! Canonical char-literal text for a Unicode scalar value.
//!
//! Every codepoint is rendered as a Rust char literal with a zero-padded
//! six-digit escape, e.g. `'\u{0020ac}'`. Six digits is the widest escape
//! Rust accepts and covers U+10FFFF, so every scalar value has exactly one
//! spelling.

/// Number of hex digits in the escape.
const ESCAPE_DIGITS: usize = 6;

const LITERAL_PREFIX: &str = "'\\u{";
const LITERAL_SUFFIX: &str = "}'";

/// Render `codepoint` as a canonical Rust char literal.
///
/// No range checking is done here; callers only pass scalar values.
pub fn encode_char_literal(codepoint: u32) -> String {
    format!("{LITERAL_PREFIX}{codepoint:0width$x}{LITERAL_SUFFIX}", width = ESCAPE_DIGITS)
}

/// Parse a literal produced by [`encode_char_literal`] back to its value.
///
/// Returns `None` for anything that is not exactly in the canonical format.
pub fn decode_char_literal(literal: &str) -> Option<u32> {
    let digits = literal
        .strip_prefix(LITERAL_PREFIX)?
        .strip_suffix(LITERAL_SUFFIX)?;
    if digits.len() != ESCAPE_DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
