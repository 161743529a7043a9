//! # Markdown Stupefy
//!
//! Text normalization for Markdown documents:
//! - `stupefy`: smart quotes, dashes, ellipses, arrows and symbols to ASCII / HTML entities
//! - `remove-emoji`: strip emoji by codepoint range
//! - `cleanup-whitespace`: trailing whitespace and line endings
//!
//! Plus `build-table` to regenerate the emoji range table from Unicode data.

mod cli;
mod core;
mod run;

use clap::{CommandFactory, Parser};

use crate::cli::{Args, Commands, TransformArgs};
use crate::core::transform::Transform;

fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match &args.command {
        Commands::BuildTable { input, output } => core::cli::run_build_table(input, output),
        Commands::Config => {
            let config = core::config::load(args.emoji_table.clone());
            core::cli::run_config(&config);
        }
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            cli::generate(*shell, &mut cmd, name, &mut std::io::stdout());
        }
        Commands::Stupefy(targs) => run_document(&args, Transform::Stupefy, targs),
        Commands::RemoveEmoji(targs) => run_document(&args, Transform::RemoveEmoji, targs),
        Commands::CleanupWhitespace(targs) => {
            run_document(&args, Transform::CleanupWhitespace, targs)
        }
    }
}

/// Run one of the document commands and exit non-zero on failure (or pending changes with `--check`).
fn run_document(args: &Args, transform: Transform, targs: &TransformArgs) {
    // Only emoji removal needs the table; skip loading it otherwise.
    let table = if transform == Transform::RemoveEmoji {
        let config = core::config::load(args.emoji_table.clone());
        core::cli::load_table(&config)
    } else {
        core::emoji::EmojiTable::empty()
    };

    let summary = run::run_transform(transform, targs, &table);
    if summary.failed > 0 || (targs.check && summary.changed > 0) {
        std::process::exit(1);
    }
}
