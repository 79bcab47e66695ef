use serde::{Deserialize, Serialize};
use std::fmt;

/// The two codepoint slots stored for every entity name.
///
/// A `'\0'` in the first slot marks a prefix-only entry: the name is a valid
/// partial match but not itself a complete reference. A `'\0'` in the second
/// slot marks an unused slot for single-codepoint entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Codepoints(pub [char; 2]);

impl Codepoints {
    /// Placeholder stored for synthetic prefixes and the empty name.
    pub const PREFIX_ONLY: Self = Self(['\0', '\0']);

    /// A single significant codepoint, second slot unused.
    pub fn single(c: char) -> Self {
        Self([c, '\0'])
    }

    /// Two significant codepoints.
    pub fn pair(first: char, second: char) -> Self {
        Self([first, second])
    }

    /// Whether this entry only marks a valid prefix.
    pub fn is_prefix_only(self) -> bool {
        self.0[0] == '\0'
    }

    /// The significant (non-zero) characters, in order.
    pub fn chars(self) -> impl Iterator<Item = char> {
        self.0.into_iter().filter(|&c| c != '\0')
    }

    /// Both slots as raw integers, zero for empty slots.
    pub fn as_u32(self) -> [u32; 2] {
        [self.0[0] as u32, self.0[1] as u32]
    }
}

impl fmt::Display for Codepoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.as_u32();
        write!(f, "[{a:#x}, {b:#x}]")
    }
}
