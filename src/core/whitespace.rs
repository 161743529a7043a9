//! Trailing whitespace and line ending cleanup.

/// Strip trailing spaces and tabs from every line, normalize line endings to
/// `\n` and end the text with exactly one newline (even when empty).
pub fn cleanup_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        // A trailing '\r' is the rest of a CRLF ending (or a stray one) and goes too.
        out.push_str(line.trim_end_matches([' ', '\t', '\r']));
    }
    let kept = out.trim_end_matches('\n').len();
    out.truncate(kept);
    out.push('\n');
    out
}
