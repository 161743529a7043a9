//! Range table builder: turns the Unicode emoji property listing into an [`EmojiTable`].
//!
//! Only data lines whose property field is exactly `Emoji` are used; excluded
//! codepoints are cut out of each listed range, leaving the maximal runs around them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use super::format::{self, Metadata};
use super::{CodepointEntry, EmojiTable, ExclusionSet};

const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Errors from building or writing an emoji table.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    fn malformed(line: usize, reason: impl Into<String>) -> Self {
        BuildError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    fn io(path: &Path, source: io::Error) -> Self {
        BuildError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// `<codepoints> ; Emoji [# comment]`, with the property matched as a whole field.
fn property_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([^;#]*?)\s*;\s*Emoji\s*(?:#.*)?$").expect("property regex is valid")
    })
}

/// `XXXX` or `XXXX..YYYY` in hexadecimal.
fn codepoint_field() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9A-Fa-f]+)(?:\.\.([0-9A-Fa-f]+))?$").expect("codepoint regex is valid")
    })
}

fn parse_codepoint(hex: &str, line: usize) -> Result<u32, BuildError> {
    let code = u32::from_str_radix(hex, 16)
        .map_err(|e| BuildError::malformed(line, format!("invalid codepoint '{}': {}", hex, e)))?;
    if code > MAX_CODEPOINT {
        return Err(BuildError::malformed(
            line,
            format!("codepoint U+{:X} is beyond U+10FFFF", code),
        ));
    }
    Ok(code)
}

/// Parse the `Emoji` property lines of `source` into a start-sorted table,
/// leaving out everything in `exclusions`.
pub fn build_table(source: &str, exclusions: &ExclusionSet) -> Result<EmojiTable, BuildError> {
    let mut entries = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let Some(caps) = property_line().captures(line) else {
            continue;
        };
        let field = &caps[1];
        let Some(cps) = codepoint_field().captures(field) else {
            return Err(BuildError::malformed(
                line_no,
                format!("invalid codepoint field '{}'", field),
            ));
        };

        let start = parse_codepoint(&cps[1], line_no)?;
        match cps.get(2) {
            None => {
                if !exclusions.excludes(start) {
                    entries.push(CodepointEntry::Single(start));
                }
            }
            Some(end) => {
                let end = parse_codepoint(end.as_str(), line_no)?;
                if end < start {
                    return Err(BuildError::malformed(
                        line_no,
                        format!("range end U+{:04X} is before start U+{:04X}", end, start),
                    ));
                }
                split_range(start, end, exclusions, &mut entries);
            }
        }
    }

    Ok(EmojiTable::new(entries))
}

/// Push the maximal non-excluded runs of `start..=end`.
fn split_range(start: u32, end: u32, exclusions: &ExclusionSet, out: &mut Vec<CodepointEntry>) {
    let mut open: Option<u32> = None;
    for code in start..=end {
        if exclusions.excludes(code) {
            if let Some(run_start) = open.take() {
                out.push(CodepointEntry::span(run_start, code - 1));
            }
        } else if open.is_none() {
            open = Some(code);
        }
    }
    if let Some(run_start) = open {
        out.push(CodepointEntry::span(run_start, end));
    }
}

/// Read `input`, build the table with the default exclusions and write it to
/// `output` as JSON lines. The output file is replaced atomically.
/// Returns the number of entries written.
pub fn build_file(input: &Path, output: &Path) -> Result<usize, BuildError> {
    let source = fs::read_to_string(input).map_err(|e| BuildError::io(input, e))?;
    let table = build_table(&source, &ExclusionSet::default())?;
    log::info!(
        "built {} entries covering {} codepoints from {}",
        table.len(),
        table.codepoint_count(),
        input.display()
    );

    let jsonl = format::to_jsonl(&table, &Metadata::now(format::SOURCE_URL))
        .map_err(|e| BuildError::io(output, e))?;
    let tmp = output.with_extension("tmp");
    fs::write(&tmp, jsonl).map_err(|e| BuildError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, output) {
        let _ = fs::remove_file(&tmp);
        return Err(BuildError::io(output, e));
    }
    Ok(table.len())
}
