//! Rust literal syntax for table values.

use charref_tables::encode_char_literal;
use charref_types::Codepoints;

/// A Rust string literal for an entity name.
pub fn string_literal(name: &str) -> String {
    format!("{name:?}")
}

/// A Rust char literal, via the canonical escape.
pub fn char_literal(c: char) -> String {
    encode_char_literal(u32::from(c))
}

/// `Some('\u{..}')` or `None`.
pub fn option_char_literal(c: Option<char>) -> String {
    match c {
        Some(c) => format!("Some({})", char_literal(c)),
        None => "None".to_string(),
    }
}

/// `['\u{..}', '\u{..}']`, zero slots included.
pub fn pair_literal(codepoints: Codepoints) -> String {
    let [a, b] = codepoints.0;
    format!("[{}, {}]", char_literal(a), char_literal(b))
}
