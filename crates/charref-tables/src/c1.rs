//! C1 control range replacements.
//!
//! HTML replaces most numeric references in U+0080..U+009F with the
//! characters Windows-1252 puts at those bytes. [`C1_REPLACEMENTS_SPEC`] is
//! that table as published, one `<byte> <codepoint> <description>` record
//! per line; [`build_c1_table`] indexes it by `byte - 0x80`.

use charref_types::{Result, TableError};
use tracing::debug;

/// Number of slots in the table (bytes 0x80..=0x9F).
pub const C1_TABLE_LEN: usize = 32;

/// First byte covered by the table.
const C1_FIRST_BYTE: u8 = 0x80;
/// Last byte covered by the table.
const C1_LAST_BYTE: u8 = 0x9F;

const BYTE_PREFIX: &str = "0x";
const CODEPOINT_PREFIX: &str = "U+";

/// The replacement table, copied from the HTML standard.
///
/// The 0x00 record is listed there too but is handled by the tokenizer
/// itself, so the builder skips it.
pub const C1_REPLACEMENTS_SPEC: &str = "
0x00    U+FFFD  REPLACEMENT CHARACTER
0x80    U+20AC  EURO SIGN (€)
0x82    U+201A  SINGLE LOW-9 QUOTATION MARK (‚)
0x83    U+0192  LATIN SMALL LETTER F WITH HOOK (ƒ)
0x84    U+201E  DOUBLE LOW-9 QUOTATION MARK („)
0x85    U+2026  HORIZONTAL ELLIPSIS (…)
0x86    U+2020  DAGGER (†)
0x87    U+2021  DOUBLE DAGGER (‡)
0x88    U+02C6  MODIFIER LETTER CIRCUMFLEX ACCENT (ˆ)
0x89    U+2030  PER MILLE SIGN (‰)
0x8A    U+0160  LATIN CAPITAL LETTER S WITH CARON (Š)
0x8B    U+2039  SINGLE LEFT-POINTING ANGLE QUOTATION MARK (‹)
0x8C    U+0152  LATIN CAPITAL LIGATURE OE (Œ)
0x8E    U+017D  LATIN CAPITAL LETTER Z WITH CARON (Ž)
0x91    U+2018  LEFT SINGLE QUOTATION MARK (‘)
0x92    U+2019  RIGHT SINGLE QUOTATION MARK (’)
0x93    U+201C  LEFT DOUBLE QUOTATION MARK (“)
0x94    U+201D  RIGHT DOUBLE QUOTATION MARK (”)
0x95    U+2022  BULLET (•)
0x96    U+2013  EN DASH (–)
0x97    U+2014  EM DASH (—)
0x98    U+02DC  SMALL TILDE (˜)
0x99    U+2122  TRADE MARK SIGN (™)
0x9A    U+0161  LATIN SMALL LETTER S WITH CARON (š)
0x9B    U+203A  SINGLE RIGHT-POINTING ANGLE QUOTATION MARK (›)
0x9C    U+0153  LATIN SMALL LIGATURE OE (œ)
0x9E    U+017E  LATIN SMALL LETTER Z WITH CARON (ž)
0x9F    U+0178  LATIN CAPITAL LETTER Y WITH DIAERESIS (Ÿ)
";

/// Replacement codepoints for raw bytes 0x80..=0x9F, indexed by offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct C1Table {
    slots: [Option<char>; C1_TABLE_LEN],
}

impl C1Table {
    /// Build the table from [`C1_REPLACEMENTS_SPEC`].
    pub fn standard() -> Result<Self> {
        build_c1_table(C1_REPLACEMENTS_SPEC)
    }

    /// Replacement for a raw byte, if the byte is in range and remapped.
    pub fn get(&self, byte: u8) -> Option<char> {
        if !(C1_FIRST_BYTE..=C1_LAST_BYTE).contains(&byte) {
            return None;
        }
        self.slots[usize::from(byte - C1_FIRST_BYTE)]
    }

    /// All 32 slots in offset order.
    pub fn slots(&self) -> &[Option<char>; C1_TABLE_LEN] {
        &self.slots
    }

    /// `(byte, replacement)` pairs in offset order, absent slots included.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Option<char>)> + '_ {
        (C1_FIRST_BYTE..=C1_LAST_BYTE).zip(self.slots.iter().copied())
    }

    /// Number of remapped bytes.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse replacement records into a [`C1Table`].
///
/// Blank lines are skipped. Any other line must be `0x<hex> U+<hex> ...`;
/// the first line that is not aborts the build.
pub fn build_c1_table(spec_text: &str) -> Result<C1Table> {
    let mut slots = [None; C1_TABLE_LEN];

    for (idx, text) in spec_text.lines().enumerate() {
        let line = idx as u32 + 1;
        if text.trim().is_empty() {
            continue;
        }
        let malformed = |reason: &str| TableError::malformed_line(line, text, reason);

        let mut fields = text.split_whitespace();
        let (Some(byte_field), Some(codepoint_field)) = (fields.next(), fields.next()) else {
            return Err(malformed("expected `<byte> <codepoint> <description>`"));
        };

        let byte_digits = byte_field
            .strip_prefix(BYTE_PREFIX)
            .ok_or_else(|| malformed("byte field must start with `0x`"))?;
        let codepoint_digits = codepoint_field
            .strip_prefix(CODEPOINT_PREFIX)
            .ok_or_else(|| malformed("codepoint field must start with `U+`"))?;

        let byte = parse_hex(byte_digits)
            .and_then(|b| u8::try_from(b).ok())
            .ok_or_else(|| malformed("byte is not a two-digit hex value"))?;

        if byte == 0 {
            // NUL is outside 0x80..0x9F and has its own tokenizer path.
            continue;
        }
        if !(C1_FIRST_BYTE..=C1_LAST_BYTE).contains(&byte) {
            return Err(malformed("byte is outside 0x80..=0x9F"));
        }

        let replacement = parse_hex(codepoint_digits)
            .and_then(char::from_u32)
            .filter(|&c| c != '\0')
            .ok_or_else(|| malformed("codepoint is not a non-null Unicode scalar value"))?;

        let slot = &mut slots[usize::from(byte - C1_FIRST_BYTE)];
        if slot.is_some() {
            return Err(malformed("byte is listed more than once"));
        }
        *slot = Some(replacement);
    }

    let table = C1Table { slots };
    debug!(remapped = table.len(), "built C1 replacement table");
    Ok(table)
}

fn parse_hex(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
