//! Emoji classification by codepoint range.
//!
//! The table is built offline from the Unicode emoji property listing (see [`builder`]),
//! shipped as JSON lines (see [`format`]) and loaded once at startup (see [`loader`]).
//! Classification is per codepoint, not per grapheme cluster: joiners, variation
//! selectors and other sequence glue outside the table survive removal.

pub mod builder;
pub mod exclusions;
pub mod format;
pub mod loader;

#[cfg(test)]
mod tests;

pub use builder::{BuildError, build_table};
pub use exclusions::ExclusionSet;
pub use loader::{EmbeddedLoader, FileLoader, LoadError, LoadedTable, TableLoader, load_or_empty};

/// One table unit: a single codepoint or an inclusive codepoint range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodepointEntry {
    Single(u32),
    Range(u32, u32),
}

impl CodepointEntry {
    /// Entry for `start..=end`, collapsing to `Single` when the run is one codepoint long.
    pub fn span(start: u32, end: u32) -> Self {
        if start == end {
            CodepointEntry::Single(start)
        } else {
            CodepointEntry::Range(start, end)
        }
    }

    pub fn start(&self) -> u32 {
        match *self {
            CodepointEntry::Single(code) => code,
            CodepointEntry::Range(start, _) => start,
        }
    }

    pub fn end(&self) -> u32 {
        match *self {
            CodepointEntry::Single(code) => code,
            CodepointEntry::Range(_, end) => end,
        }
    }

    pub fn contains(&self, code: u32) -> bool {
        match *self {
            CodepointEntry::Single(c) => c == code,
            CodepointEntry::Range(start, end) => start <= code && code <= end,
        }
    }

    /// Number of codepoints covered by this entry.
    pub fn width(&self) -> u32 {
        self.end() - self.start() + 1
    }
}

/// Immutable, start-sorted set of emoji codepoint entries.
#[derive(Clone, Debug)]
pub struct EmojiTable {
    entries: Vec<CodepointEntry>,
    disjoint: bool,
}

impl EmojiTable {
    /// Sort `entries` by start and freeze them into a table.
    pub fn new(mut entries: Vec<CodepointEntry>) -> Self {
        entries.sort_by_key(CodepointEntry::start);
        let disjoint = entries.windows(2).all(|w| w[0].end() < w[1].start());
        Self { entries, disjoint }
    }

    /// Table that classifies nothing as emoji.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn entries(&self) -> &[CodepointEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of codepoints covered (overlaps counted twice).
    pub fn codepoint_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.width())).sum()
    }

    /// Sorted ascending by start with no two entries overlapping.
    #[allow(dead_code)]
    pub fn is_well_formed(&self) -> bool {
        self.disjoint
    }

    /// True if `code` falls inside any entry of the table.
    pub fn is_emoji(&self, code: u32) -> bool {
        if !self.disjoint {
            return self.entries.iter().any(|e| e.contains(code));
        }
        // Last entry starting at or before `code` is the only candidate.
        let idx = self.entries.partition_point(|e| e.start() <= code);
        idx > 0 && self.entries[idx - 1].contains(code)
    }

    pub fn is_emoji_char(&self, ch: char) -> bool {
        self.is_emoji(ch as u32)
    }

    /// True if [`remove_emoji`](Self::remove_emoji) would change `text`.
    pub fn contains_emoji(&self, text: &str) -> bool {
        text.chars().any(|c| self.is_emoji_char(c))
    }

    /// Drop every emoji codepoint from `text`, keeping everything else in order.
    /// Whitespace around removed emoji is left as is.
    pub fn remove_emoji(&self, text: &str) -> String {
        text.chars().filter(|&c| !self.is_emoji_char(c)).collect()
    }

    /// UTF-16 variant of [`remove_emoji`](Self::remove_emoji). Surrogate pairs are
    /// classified as one codepoint; unpaired surrogates are kept unchanged.
    #[allow(dead_code)]
    pub fn remove_emoji_utf16(&self, units: &[u16]) -> Vec<u16> {
        let mut out = Vec::with_capacity(units.len());
        let mut buf = [0u16; 2];
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(ch) if self.is_emoji_char(ch) => {}
                Ok(ch) => out.extend_from_slice(ch.encode_utf16(&mut buf)),
                Err(e) => out.push(e.unpaired_surrogate()),
            }
        }
        out
    }
}

impl Default for EmojiTable {
    fn default() -> Self {
        Self::empty()
    }
}
