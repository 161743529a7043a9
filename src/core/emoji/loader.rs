//! Table loaders: the table compiled into the binary, or a JSON-lines file on disk.
//!
//! Loading happens once at startup. [`load_or_empty`] applies the failure policy:
//! an unloadable table becomes an empty one (emoji removal turns into a no-op)
//! and a warning is logged.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::EmojiTable;
use super::format::{self, Metadata};

/// Table generated from `data/emoji-data.txt`, validated by the build script.
const EMBEDDED_TABLE: &str = include_str!("../../../data/emoji-table.jsonl");

/// Errors when loading an emoji table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read emoji table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Emoji table {0} has no valid entries")]
    Empty(String),
}

/// A loaded table together with its advisory metadata.
#[derive(Debug, Default)]
pub struct LoadedTable {
    pub table: EmojiTable,
    pub metadata: Option<Metadata>,
}

/// Source of the emoji table.
pub trait TableLoader {
    /// Short human-readable description, e.g. "embedded" or a file path.
    fn describe(&self) -> String;
    fn load(&self) -> Result<LoadedTable, LoadError>;
}

fn from_jsonl(input: &str, origin: &str) -> Result<LoadedTable, LoadError> {
    let parsed = format::parse_jsonl(input);
    if parsed.skipped > 0 {
        log::warn!(
            "emoji table {}: skipped {} malformed line(s)",
            origin,
            parsed.skipped
        );
    }
    if parsed.entries.is_empty() {
        return Err(LoadError::Empty(origin.to_string()));
    }
    Ok(LoadedTable {
        table: EmojiTable::new(parsed.entries),
        metadata: parsed.metadata,
    })
}

/// Loads the table compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedLoader;

impl TableLoader for EmbeddedLoader {
    fn describe(&self) -> String {
        "embedded".to_string()
    }

    fn load(&self) -> Result<LoadedTable, LoadError> {
        from_jsonl(EMBEDDED_TABLE, "embedded")
    }
}

/// Loads a JSON-lines table from disk.
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableLoader for FileLoader {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<LoadedTable, LoadError> {
        let data = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        from_jsonl(&data, &self.describe())
    }
}

/// Load a table, falling back to an empty table (with a warning) on failure.
pub fn load_or_empty(loader: &dyn TableLoader) -> LoadedTable {
    match loader.load() {
        Ok(loaded) => {
            log::debug!(
                "loaded {} emoji table entries from {}",
                loaded.table.len(),
                loader.describe()
            );
            loaded
        }
        Err(e) => {
            log::warn!("{}; emoji removal is disabled", e);
            LoadedTable::default()
        }
    }
}
