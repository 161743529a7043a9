use std::env;
use std::path::PathBuf;

use crate::core::emoji::{EmbeddedLoader, FileLoader, TableLoader};
use crate::core::paths;

/// Environment variable naming an emoji table file.
pub const TABLE_ENV: &str = "MARKDOWN_STUPEFY_EMOJI_TABLE";

/// Where the emoji table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    Embedded,
    File(PathBuf),
}

impl TableSource {
    pub fn loader(&self) -> Box<dyn TableLoader> {
        match self {
            TableSource::Embedded => Box::new(EmbeddedLoader),
            TableSource::File(path) => Box::new(FileLoader::new(path.clone())),
        }
    }
}

/// What decided the table source, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    Flag,
    Env,
    ConfigDir,
    Default,
}

impl std::fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceOrigin::Flag => write!(f, "from --emoji-table"),
            SourceOrigin::Env => write!(f, "from {}", TABLE_ENV),
            SourceOrigin::ConfigDir => write!(f, "from config directory"),
            SourceOrigin::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub table: TableSource,
    pub origin: SourceOrigin,
}

/// Resolve configuration: `--emoji-table` flag, then the environment, then a
/// table in the config directory, then the embedded table.
pub fn load(table_flag: Option<PathBuf>) -> Config {
    let env_table = env::var(TABLE_ENV).ok();
    let user_table = paths::user_table_path().filter(|p| p.is_file());
    resolve(table_flag, env_table, user_table)
}

fn resolve(
    table_flag: Option<PathBuf>,
    env_table: Option<String>,
    user_table: Option<PathBuf>,
) -> Config {
    if let Some(path) = table_flag {
        return Config {
            table: TableSource::File(path),
            origin: SourceOrigin::Flag,
        };
    }
    if let Some(path) = env_table.filter(|s| !s.trim().is_empty()) {
        return Config {
            table: TableSource::File(PathBuf::from(path.trim())),
            origin: SourceOrigin::Env,
        };
    }
    if let Some(path) = user_table {
        return Config {
            table: TableSource::File(path),
            origin: SourceOrigin::ConfigDir,
        };
    }
    Config {
        table: TableSource::Embedded,
        origin: SourceOrigin::Default,
    }
}
