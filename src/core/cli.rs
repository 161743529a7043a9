//! CLI-only commands: config info and emoji table generation.
//!
//! These produce plain text output and exit with status 1 on failure.

use std::path::Path;

use crate::core::config::Config;
use crate::core::emoji::{self, TableLoader, builder};
use crate::core::paths;

/// Run the `config` command: display paths and the emoji table in use.
pub fn run_config(config: &Config) {
    let config_dir = paths::config_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    let loader = config.table.loader();

    println!("Version:      {} {}", paths::APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Config:       {}", config_dir);
    println!("Emoji table:  {} ({})", loader.describe(), config.origin);

    match loader.load() {
        Ok(loaded) => {
            println!(
                "Entries:      {} ({} codepoints)",
                loaded.table.len(),
                loaded.table.codepoint_count()
            );
            if let Some(meta) = loaded.metadata {
                println!("Generated:    {}", meta.version);
                println!("Source:       {}", meta.source);
            }
        }
        Err(e) => println!("Entries:      unavailable ({}); emoji removal is disabled", e),
    }
}

/// Run the `build-table` command: parse `input` and write the table to `output`.
pub fn run_build_table(input: &Path, output: &Path) {
    match builder::build_file(input, output) {
        Ok(count) => {
            println!(
                "Generated emoji table with {} entries: {}",
                count,
                output.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load the configured emoji table once; failures leave emoji removal disabled.
pub fn load_table(config: &Config) -> emoji::EmojiTable {
    emoji::load_or_empty(&*config.table.loader()).table
}
