//! The named character reference registry document.
//!
//! The registry is the `entities.json` file published alongside the HTML
//! standard: a JSON object keyed by `&`-prefixed names, each value holding
//! the `codepoints` the reference expands to.
//!
//! ```json
//! { "&amp;": { "codepoints": [38], "characters": "&" } }
//! ```

use std::collections::BTreeMap;

use charref_types::{Result, TableError};
use serde::{Deserialize, Serialize};

/// One registry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// The scalar values the reference expands to.
    pub codepoints: Vec<u32>,
    /// The expansion as a string. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
}

/// The parsed registry, keyed by the raw `&`-prefixed name.
///
/// Keys are held in a `BTreeMap` so iteration never depends on document
/// or hash order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry document from raw JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| TableError::MalformedRegistry {
            message: e.to_string(),
        })
    }

    /// Add or replace a record.
    pub fn insert(&mut self, key: impl Into<String>, codepoints: Vec<u32>) {
        self.entries.insert(
            key.into(),
            RegistryEntry {
                codepoints,
                characters: None,
            },
        );
    }

    /// Records in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegistryEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<u32>)> for Registry {
    fn from_iter<I: IntoIterator<Item = (K, Vec<u32>)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (key, codepoints) in iter {
            registry.insert(key, codepoints);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charref_types::ErrorCode;

    #[test]
    fn parses_registry_document() {
        let json = br#"{
            "&amp;": { "codepoints": [38], "characters": "&" },
            "&NotEqualTilde;": { "codepoints": [8770, 824], "characters": "\u2242\u0338" }
        }"#;
        let registry = Registry::from_json(json).unwrap();
        assert_eq!(registry.len(), 2);

        let keys: Vec<&str> = registry.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["&NotEqualTilde;", "&amp;"]);

        let (_, amp) = registry.iter().nth(1).unwrap();
        assert_eq!(amp.codepoints, vec![38]);
        assert_eq!(amp.characters.as_deref(), Some("&"));

        let (_, tilde) = registry.iter().next().unwrap();
        assert_eq!(tilde.characters.as_deref(), Some("\u{2242}\u{0338}"));
    }

    #[test]
    fn parses_non_ascii_document_text() {
        let json = r#"{ "&NotEqualTilde;": { "codepoints": [8770, 824], "characters": "≂̸" } }"#;
        let registry = Registry::from_json(json.as_bytes()).unwrap();
        let (key, entry) = registry.iter().next().unwrap();
        assert_eq!(key, "&NotEqualTilde;");
        assert_eq!(entry.codepoints, vec![8770, 824]);
        assert_eq!(entry.characters.as_deref(), Some("\u{2242}\u{0338}"));
    }

    #[test]
    fn characters_field_is_optional() {
        let registry = Registry::from_json(br#"{ "&lt": { "codepoints": [60] } }"#).unwrap();
        let (_, lt) = registry.iter().next().unwrap();
        assert_eq!(lt.characters, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = br#"{ "&gt;": { "codepoints": [62], "since": "html4" } }"#;
        assert_eq!(Registry::from_json(json).unwrap().len(), 1);
    }

    #[test]
    fn schema_violations() {
        let cases: &[&[u8]] = &[
            br#"{ "&amp;": { "characters": "&" } }"#,
            br#"{ "&amp;": { "codepoints": [-38] } }"#,
            br#"{ "&amp;": { "codepoints": "38" } }"#,
            br#"{ "&amp;": { "codepoints": [38.5] } }"#,
            br#"[ "&amp;" ]"#,
            b"{ not json",
        ];
        for json in cases {
            let err = Registry::from_json(json).unwrap_err();
            assert_eq!(
                err.code(),
                ErrorCode::MALFORMED_REGISTRY,
                "input {}",
                String::from_utf8_lossy(json)
            );
        }
    }

    #[test]
    fn empty_codepoints_parse() {
        // Arity is checked when the entity table is built, not here.
        let registry = Registry::from_json(br#"{ "&x;": { "codepoints": [] } }"#).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn from_iterator() {
        let registry: Registry = [("&amp;", vec![38]), ("&lt;", vec![60])].into_iter().collect();
        assert_eq!(registry.len(), 2);
    }
}
