//! Application run modes: logger init and document transforms over files or stdin.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::cli::{Args, TransformArgs};
use crate::core::emoji::EmojiTable;
use crate::core::transform::{Outcome, Transform};

/// Initialize env_logger. Logs go to stderr so stdout only carries command output.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Counts from a transform run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Inputs whose text changed (or would change with `--check`).
    pub changed: usize,
    /// Inputs that could not be read or written.
    pub failed: usize,
}

/// Decode file or stdin bytes. Invalid UTF-8 becomes U+FFFD rather than failing.
fn decode(bytes: Vec<u8>, name: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("{}: invalid UTF-8, replacing malformed sequences", name);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Run a transform on every file in `args`, or on stdin when no file (or `-`) is given.
pub fn run_transform(transform: Transform, args: &TransformArgs, table: &EmojiTable) -> Summary {
    let use_stdin = args.files.is_empty() || args.files.iter().all(|p| p.as_os_str() == "-");
    if use_stdin {
        return match transform_stdin(transform, args.check, table) {
            Ok(changed) => Summary {
                changed: usize::from(changed),
                failed: 0,
            },
            Err(e) => {
                eprintln!("Error: {}", e);
                Summary {
                    changed: 0,
                    failed: 1,
                }
            }
        };
    }

    let mut summary = Summary::default();
    for path in args.files.iter().filter(|p| p.as_os_str() != "-") {
        match transform_file(transform, path, args.check, table) {
            Ok(true) => summary.changed += 1,
            Ok(false) => {}
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                summary.failed += 1;
            }
        }
    }
    summary
}

fn transform_stdin(transform: Transform, check: bool, table: &EmojiTable) -> io::Result<bool> {
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    let text = decode(bytes, "stdin");

    let (output, changed) = match transform.run(&text, table) {
        Outcome::Changed(new_text) => (new_text, true),
        Outcome::Unchanged => (text, false),
    };
    log::info!(
        "stdin: {}",
        if changed {
            transform.success_message()
        } else {
            transform.unchanged_message()
        }
    );
    if !check {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
    }
    Ok(changed)
}

/// Rewrite `path` in place when the transform changes it. Returns whether it changed.
fn transform_file(
    transform: Transform,
    path: &Path,
    check: bool,
    table: &EmojiTable,
) -> io::Result<bool> {
    let text = decode(fs::read(path)?, &path.display().to_string());
    match transform.run(&text, table) {
        Outcome::Unchanged => {
            println!("{}: {}", path.display(), transform.unchanged_message());
            Ok(false)
        }
        Outcome::Changed(_) if check => {
            println!("{}: would change", path.display());
            Ok(true)
        }
        Outcome::Changed(new_text) => {
            fs::write(path, new_text)?;
            println!("{}: {}", path.display(), transform.success_message());
            Ok(true)
        }
    }
}
