//! Centralized path helpers for the config directory.

use std::path::PathBuf;

/// Application name (from Cargo.toml `package.name`).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// File name of a user-provided emoji table inside the config directory.
pub const TABLE_FILE_NAME: &str = "emoji-table.jsonl";

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", "polymorphl", APP_NAME)
}

/// Config directory (~/.config/markdown-stupefy/).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Location of an optional user emoji table (~/.config/markdown-stupefy/emoji-table.jsonl).
pub fn user_table_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(TABLE_FILE_NAME))
}
