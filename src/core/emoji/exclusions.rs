//! Characters withheld from the emoji table even though Unicode gives them the
//! Emoji property. Most are plain text that only renders as emoji when followed by
//! a variation selector. Consulted by the table builder only; the runtime table
//! already has them baked out.

use super::CodepointEntry;

/// The curated exclusions applied to every generated table.
const DEFAULT_EXCLUSIONS: &[CodepointEntry] = &[
    CodepointEntry::Single(0x0023),         // # hash sign
    CodepointEntry::Single(0x002A),         // * asterisk
    CodepointEntry::Range(0x0030, 0x0039),  // 0-9 digits
    CodepointEntry::Single(0x00A9),         // © copyright
    CodepointEntry::Single(0x00AE),         // ® registered
    CodepointEntry::Single(0x2122),         // ™ trade mark
    CodepointEntry::Range(0x2000, 0x206F),  // General Punctuation
    CodepointEntry::Range(0x2070, 0x209F),  // Superscripts and Subscripts
    CodepointEntry::Range(0x20A0, 0x20CF),  // Currency Symbols
    CodepointEntry::Range(0x2100, 0x214F),  // Letterlike Symbols
    CodepointEntry::Range(0x2190, 0x21FF),  // Arrows
    CodepointEntry::Range(0x0020, 0x007E),  // printable ASCII
];

/// Codepoints and ranges that must never be classified as emoji.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusionSet {
    entries: Vec<CodepointEntry>,
}

impl ExclusionSet {
    pub fn new(entries: Vec<CodepointEntry>) -> Self {
        Self { entries }
    }

    /// Set that excludes nothing.
    #[allow(dead_code)]
    pub fn none() -> Self {
        Self::new(Vec::new())
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> &[CodepointEntry] {
        &self.entries
    }

    pub fn excludes(&self, code: u32) -> bool {
        self.entries.iter().any(|e| e.contains(code))
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSIONS.to_vec())
    }
}
