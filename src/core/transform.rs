//! Document commands: the three buffer transforms a host can run on a whole document.
//!
//! Each transform is a pure function of the buffer text. Hosts replace the buffer
//! only when the result differs from the input.

use crate::core::emoji::EmojiTable;
use crate::core::stupefy::stupefy;
use crate::core::whitespace::cleanup_whitespace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    Stupefy,
    RemoveEmoji,
    CleanupWhitespace,
}

/// Result of running a transform on a buffer.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// New buffer contents.
    Changed(String),
    Unchanged,
}

impl Transform {
    /// Apply the transform to `text`. `table` is only used by [`Transform::RemoveEmoji`].
    pub fn apply(self, text: &str, table: &EmojiTable) -> String {
        match self {
            Transform::Stupefy => stupefy(text),
            Transform::RemoveEmoji => table.remove_emoji(text),
            Transform::CleanupWhitespace => cleanup_whitespace(text),
        }
    }

    /// Apply the transform and report whether the buffer changed.
    pub fn run(self, text: &str, table: &EmojiTable) -> Outcome {
        if self == Transform::RemoveEmoji && !table.contains_emoji(text) {
            return Outcome::Unchanged;
        }
        let result = self.apply(text, table);
        if result == text {
            Outcome::Unchanged
        } else {
            Outcome::Changed(result)
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Transform::Stupefy => "Text successfully stupefied!",
            Transform::RemoveEmoji => "Emoji successfully removed!",
            Transform::CleanupWhitespace => "Whitespace successfully cleaned up!",
        }
    }

    pub fn unchanged_message(self) -> &'static str {
        match self {
            Transform::Stupefy => "No smart typography found to stupefy",
            Transform::RemoveEmoji => "No emoji found to remove",
            Transform::CleanupWhitespace => "No whitespace to clean up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::emoji::{EmbeddedLoader, TableLoader};

    fn table() -> EmojiTable {
        EmbeddedLoader.load().unwrap().table
    }

    #[test]
    fn run_reports_changes() {
        let t = table();
        assert_eq!(
            Transform::Stupefy.run("It\u{2019}s", &t),
            Outcome::Changed("It's".to_string())
        );
        assert_eq!(
            Transform::RemoveEmoji.run("Go 🚀", &t),
            Outcome::Changed("Go ".to_string())
        );
        assert_eq!(
            Transform::CleanupWhitespace.run("a  ", &t),
            Outcome::Changed("a\n".to_string())
        );
    }

    #[test]
    fn run_reports_unchanged() {
        let t = table();
        assert_eq!(Transform::Stupefy.run("plain", &t), Outcome::Unchanged);
        assert_eq!(Transform::RemoveEmoji.run("plain", &t), Outcome::Unchanged);
        assert_eq!(
            Transform::CleanupWhitespace.run("plain\n", &t),
            Outcome::Unchanged
        );
    }

    #[test]
    fn transforms_are_independent() {
        let t = table();
        let input = "\u{201C}Hi\u{201D} 😀  \n";
        assert_eq!(Transform::Stupefy.apply(input, &t), "\"Hi\" 😀  \n");
        assert_eq!(
            Transform::RemoveEmoji.apply(input, &t),
            "\u{201C}Hi\u{201D}   \n"
        );
        assert_eq!(
            Transform::CleanupWhitespace.apply(input, &t),
            "\u{201C}Hi\u{201D} 😀\n"
        );
    }

    #[test]
    fn remove_emoji_with_empty_table_is_no_op() {
        assert_eq!(
            Transform::RemoveEmoji.run("Go 🚀", &EmojiTable::empty()),
            Outcome::Unchanged
        );
    }
}
