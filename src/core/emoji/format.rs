//! JSON-lines transport format for the emoji table.
//!
//! ```text
//! {"_metadata":{"version":"2026-10-19T08:41:17.392Z","source":"https://..."}}
//! {"code":"U+2328","decimal":9000,"char":"⌨"}
//! {"range":["U+23E9","U+23EC"],"decimal":[9193,9196],"sample":"⏩⏪⏫..."}
//! ```
//!
//! The metadata record is advisory. Readers skip malformed lines instead of failing.

use std::io;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{CodepointEntry, EmojiTable};

/// Upstream location of the Unicode emoji property listing.
pub const SOURCE_URL: &str = "https://www.unicode.org/Public/UCD/latest/ucd/emoji/emoji-data.txt";

const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Provenance recorded in the first line of a generated table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Generation time (RFC 3339, UTC).
    pub version: String,
    pub source: String,
}

impl Metadata {
    /// Metadata stamped with the current time.
    pub fn now(source: &str) -> Self {
        Self {
            version: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            source: source.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Record {
    Metadata {
        #[serde(rename = "_metadata")]
        metadata: Metadata,
    },
    Range {
        range: [String; 2],
        decimal: [u32; 2],
        #[serde(default)]
        sample: String,
    },
    Single {
        code: String,
        decimal: u32,
        #[serde(rename = "char", default)]
        ch: String,
    },
}

impl Record {
    fn from_entry(entry: &CodepointEntry) -> Self {
        match *entry {
            CodepointEntry::Single(code) => Record::Single {
                code: hex(code),
                decimal: code,
                ch: char::from_u32(code).map(String::from).unwrap_or_default(),
            },
            CodepointEntry::Range(start, end) => Record::Range {
                range: [hex(start), hex(end)],
                decimal: [start, end],
                sample: sample(start, end),
            },
        }
    }

    fn to_entry(&self) -> Option<CodepointEntry> {
        match *self {
            Record::Metadata { .. } => None,
            Record::Single { decimal, .. } if decimal <= MAX_CODEPOINT => {
                Some(CodepointEntry::Single(decimal))
            }
            Record::Range {
                decimal: [start, end],
                ..
            } if start <= end && end <= MAX_CODEPOINT => Some(CodepointEntry::span(start, end)),
            _ => None,
        }
    }
}

fn hex(code: u32) -> String {
    format!("U+{:04X}", code)
}

/// Up to three characters from the start of the range, with "..." when it runs longer.
fn sample(start: u32, end: u32) -> String {
    let mut out: String = (start..=end.min(start + 2))
        .filter_map(char::from_u32)
        .collect();
    if end > start + 2 {
        out.push_str("...");
    }
    out
}

/// Result of reading a JSON-lines table.
#[derive(Debug, Default)]
pub struct ParsedTable {
    pub metadata: Option<Metadata>,
    pub entries: Vec<CodepointEntry>,
    /// Non-blank lines that were not a valid record.
    pub skipped: usize,
}

/// Parse a JSON-lines table, skipping the metadata record and any malformed line.
pub fn parse_jsonl(input: &str) -> ParsedTable {
    let mut parsed = ParsedTable::default();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = match serde_json::from_str::<Record>(line) {
            Ok(r) => r,
            Err(e) => {
                log::debug!("emoji table line {}: {}", idx + 1, e);
                parsed.skipped += 1;
                continue;
            }
        };
        match record {
            Record::Metadata { metadata } => {
                parsed.metadata.get_or_insert(metadata);
            }
            other => match other.to_entry() {
                Some(entry) => parsed.entries.push(entry),
                None => {
                    log::debug!("emoji table line {}: invalid codepoint values", idx + 1);
                    parsed.skipped += 1;
                }
            },
        }
    }
    parsed
}

/// Serialize `table` as JSON lines, metadata record first. Output ends with a newline.
pub fn to_jsonl(table: &EmojiTable, metadata: &Metadata) -> io::Result<String> {
    let mut out = String::new();
    let header = Record::Metadata {
        metadata: metadata.clone(),
    };
    let records = std::iter::once(header).chain(table.entries().iter().map(Record::from_entry));
    for record in records {
        let line = serde_json::to_string(&record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}
