//! Named character reference table with prefix closure.
//!
//! Every registry name is stored with its codepoints, and every proper
//! prefix of every name is stored too, mapped to
//! [`Codepoints::PREFIX_ONLY`] unless it is itself a reference. A tokenizer
//! can then extend its candidate name one character at a time: a hit means
//! "keep going" (and, if the value is not a placeholder, "this much already
//! matches"), a miss means no longer name can match.
//!
//! ```text
//! registry: &amp; &amp
//! table:    ""     -> [0, 0]
//!           "a"    -> [0, 0]
//!           "am"   -> [0, 0]
//!           "amp"  -> [0x26, 0]
//!           "amp;" -> [0x26, 0]
//! ```

use std::collections::BTreeMap;

use charref_types::{Codepoints, Result, TableError};
use tracing::debug;

use crate::registry::Registry;

/// Leading character of every registry key.
pub const ENTITY_MARKER: char = '&';

/// The finished, prefix-closed entity table.
///
/// Names are ordered by their Unicode scalar values (byte order of UTF-8,
/// which is the same thing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTable {
    entries: BTreeMap<String, Codepoints>,
}

impl EntityTable {
    pub fn get(&self, name: &str) -> Option<Codepoints> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries in name order, placeholders included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Codepoints)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Total number of keys, placeholders included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the empty name is present in every table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of complete references (non-placeholder entries).
    pub fn complete_count(&self) -> usize {
        self.entries.values().filter(|cp| !cp.is_prefix_only()).count()
    }

    /// Length in characters of the longest name.
    pub fn max_name_len(&self) -> usize {
        self.entries
            .keys()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Validate every registry record and build the prefix-closed table.
///
/// The first invalid record aborts the build.
pub fn build_entity_table(registry: &Registry) -> Result<EntityTable> {
    let mut entries = BTreeMap::new();
    entries.insert(String::new(), Codepoints::PREFIX_ONLY);

    let mut names = Vec::with_capacity(registry.len());
    for (key, entry) in registry.iter() {
        let (name, codepoints) = validate_entry(key, &entry.codepoints)?;
        entries.insert(name.to_owned(), codepoints);
        names.push(name);
    }

    // Every prefix of a prefix is a prefix of the original name, so one pass
    // over the registry names closes the set.
    let complete = entries.len() - 1;
    for name in names {
        for (end, _) in name.char_indices().skip(1) {
            entries
                .entry(name[..end].to_owned())
                .or_insert(Codepoints::PREFIX_ONLY);
        }
    }

    debug!(
        complete,
        placeholders = entries.len() - complete,
        "built named entity table"
    );
    Ok(EntityTable { entries })
}

/// Check one record and split it into its name and padded codepoints.
fn validate_entry<'k>(key: &'k str, codepoints: &[u32]) -> Result<(&'k str, Codepoints)> {
    if codepoints.contains(&0) {
        return Err(TableError::ZeroCodepoint { key: key.to_owned() });
    }
    if !(1..=2).contains(&codepoints.len()) {
        return Err(TableError::InvalidEntityArity {
            key: key.to_owned(),
            count: codepoints.len(),
        });
    }

    let name = key
        .strip_prefix(ENTITY_MARKER)
        .ok_or_else(|| TableError::MissingMarker { key: key.to_owned() })?;
    if name.is_empty() {
        return Err(TableError::EmptyEntityName { key: key.to_owned() });
    }

    let to_char = |value: u32| {
        char::from_u32(value).ok_or_else(|| TableError::InvalidCodepoint {
            key: key.to_owned(),
            value,
        })
    };
    let first = to_char(codepoints[0])?;
    let pair = match codepoints.get(1) {
        Some(&second) => Codepoints::pair(first, to_char(second)?),
        None => Codepoints::single(first),
    };
    Ok((name, pair))
}
