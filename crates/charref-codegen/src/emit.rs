//! Table rendering.
//!
//! Produces the complete generated source file from the two built tables.
//! Rendering is pure and infallible: every check happens while the tables
//! are built.

use charref_tables::{C1Table, EntityTable};

use crate::syntax::{option_char_literal, pair_literal, string_literal};

// ══════════════════════════════════════════════════════════════════════════════
// Fixed text
// ══════════════════════════════════════════════════════════════════════════════

const HEADER: &str = "// THIS FILE IS AUTOGENERATED - DO NOT EDIT\n";

const IMPORTS: &str = "use phf::Map;\n";

/// Name of the emitted C1 replacement array.
pub const C1_TABLE_NAME: &str = "C1_REPLACEMENTS";

/// Name of the emitted named entity map.
pub const ENTITY_TABLE_NAME: &str = "NAMED_ENTITIES";

const INDENT: &str = "    ";

/// Input identity recorded in the generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Lowercase hex SHA-256 of the raw registry document.
    pub registry_sha256: String,
}

// ══════════════════════════════════════════════════════════════════════════════
// Public API
// ══════════════════════════════════════════════════════════════════════════════

/// Render the full generated file.
pub fn emit(c1: &C1Table, entities: &EntityTable, provenance: Option<&Provenance>) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    if let Some(provenance) = provenance {
        out.push_str(&format!("// registry sha256: {}\n", provenance.registry_sha256));
    }
    out.push('\n');
    out.push_str(IMPORTS);
    out.push('\n');
    out.push_str(&emit_c1_table(c1));
    out.push('\n');
    out.push_str(&emit_entity_table(entities));
    out
}

/// Render the C1 array, one slot per line in offset order.
pub fn emit_c1_table(c1: &C1Table) -> String {
    let mut out = format!(
        "pub static {C1_TABLE_NAME}: [Option<char>; {}] = [\n",
        c1.slots().len()
    );
    for slot in c1.slots() {
        out.push_str(&format!("{INDENT}{},\n", option_char_literal(*slot)));
    }
    out.push_str("];\n");
    out
}

/// Render the entity map, one entry per line in name order.
pub fn emit_entity_table(entities: &EntityTable) -> String {
    let mut out = format!(
        "pub static {ENTITY_TABLE_NAME}: Map<&'static str, [char; 2]> = phf::phf_map! {{\n"
    );
    for (name, codepoints) in entities.iter() {
        out.push_str(&format!(
            "{INDENT}{} => {},\n",
            string_literal(name),
            pair_literal(codepoints)
        ));
    }
    out.push_str("};\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use charref_tables::{build_c1_table, build_entity_table, Registry};

    #[test]
    fn c1_table_lines() {
        let c1 = build_c1_table("0x80 U+20AC EURO SIGN\n0x9F U+0178 Y").unwrap();
        let text = emit_c1_table(&c1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 34);
        assert_eq!(lines[0], "pub static C1_REPLACEMENTS: [Option<char>; 32] = [");
        assert_eq!(lines[1], "    Some('\\u{0020ac}'),");
        assert_eq!(lines[2], "    None,");
        assert_eq!(lines[32], "    Some('\\u{000178}'),");
        assert_eq!(lines[33], "];");
    }

    #[test]
    fn entity_table_lines() {
        let registry: Registry = [("&lt;", vec![60])].into_iter().collect();
        let entities = build_entity_table(&registry).unwrap();
        let text = emit_entity_table(&entities);
        assert_eq!(
            text,
            "pub static NAMED_ENTITIES: Map<&'static str, [char; 2]> = phf::phf_map! {\n\
             \x20   \"\" => ['\\u{000000}', '\\u{000000}'],\n\
             \x20   \"l\" => ['\\u{000000}', '\\u{000000}'],\n\
             \x20   \"lt\" => ['\\u{000000}', '\\u{000000}'],\n\
             \x20   \"lt;\" => ['\\u{00003c}', '\\u{000000}'],\n\
             };\n"
        );
    }

    #[test]
    fn header_without_provenance() {
        let c1 = build_c1_table("").unwrap();
        let entities = build_entity_table(&Registry::new()).unwrap();
        let text = emit(&c1, &entities, None);
        assert!(text.starts_with("// THIS FILE IS AUTOGENERATED - DO NOT EDIT\n\nuse phf::Map;\n"));
        assert!(!text.contains("sha256"));
    }

    #[test]
    fn header_with_provenance() {
        let c1 = build_c1_table("").unwrap();
        let entities = build_entity_table(&Registry::new()).unwrap();
        let provenance = Provenance {
            registry_sha256: "ab".repeat(32),
        };
        let text = emit(&c1, &entities, Some(&provenance));
        let second_line = text.lines().nth(1).unwrap();
        assert_eq!(second_line, format!("// registry sha256: {}", "ab".repeat(32)));
    }
}
