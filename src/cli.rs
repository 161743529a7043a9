//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  markdown-stupefy stupefy README.md              Replace smart quotes, dashes, ellipses in place
  markdown-stupefy remove-emoji docs/*.md         Strip emoji from several files
  cat notes.md | markdown-stupefy cleanup-whitespace
                                                  Read stdin, write the result to stdout
  markdown-stupefy stupefy --check README.md      Exit 1 if the file would change
  markdown-stupefy build-table emoji-data.txt emoji-table.jsonl
                                                  Regenerate the emoji range table
  markdown-stupefy config                         Show config paths and emoji table status
  markdown-stupefy completions bash               Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Replace smart typography, strip emoji and clean up whitespace in Markdown",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Emoji table to load instead of the embedded one (JSON lines)
    #[arg(long, value_name = "PATH", global = true)]
    pub emoji_table: Option<PathBuf>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Files to transform, shared by the document commands.
#[derive(ClapArgs)]
pub struct TransformArgs {
    /// Files to rewrite in place (reads stdin and writes stdout when empty or '-')
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Don't write anything; exit with status 1 if any input would change
    #[arg(long)]
    pub check: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace smart quotes, dashes, ellipses, arrows and symbols with ASCII
    Stupefy(TransformArgs),
    /// Remove emoji characters
    RemoveEmoji(TransformArgs),
    /// Strip trailing whitespace and end with exactly one newline
    CleanupWhitespace(TransformArgs),
    /// Build the emoji range table from a Unicode emoji-data.txt listing
    BuildTable {
        /// Unicode emoji property listing (emoji-data.txt)
        input: PathBuf,
        /// Destination table (JSON lines)
        output: PathBuf,
    },
    /// Show config paths and emoji table status
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
