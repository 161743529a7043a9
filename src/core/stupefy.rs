//! Smart typography to ASCII: curly quotes, dashes, ellipsis, arrows and a few
//! symbols that are rewritten as HTML entities.

/// Ordered (pattern, replacement) pairs. At each position the first matching
/// pattern wins; replacement output is never scanned again.
pub const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{2011}", "-"),        // non-breaking hyphen
    ("\u{2013}", "--"),       // en dash
    ("\u{2014}", "---"),      // em dash
    ("\u{2018}", "'"),        // left single quote
    ("\u{2019}", "'"),        // right single quote
    ("\u{201C}", "\""),       // left double quote
    ("\u{201D}", "\""),       // right double quote
    ("\u{2026}", "..."),      // ellipsis
    ("\u{00AB}", "<<"),       // left guillemet
    ("\u{00BB}", ">>"),       // right guillemet
    ("\u{2190}", "<-"),       // left arrow
    ("\u{2192}", "->"),       // right arrow
    ("\u{00A9}", "&copy;"),   // copyright
    ("\u{00AE}", "&reg;"),    // registered
    ("\u{00B0}", "&deg;"),    // degree
    ("\u{00B1}", "&plusmn;"), // plus-minus
    ("\u{2122}", "&trade;"),  // trade mark
];

/// Replace every smart typography character in `text` with its ASCII form.
pub fn stupefy(text: &str) -> String {
    substitute(text, REPLACEMENTS)
}

/// Single left-to-right pass of `pairs` over `text`.
pub fn substitute(text: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        match pairs
            .iter()
            .find(|(pattern, _)| !pattern.is_empty() && rest.starts_with(pattern))
        {
            Some((pattern, replacement)) => {
                out.push_str(replacement);
                rest = &rest[pattern.len()..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    out
}
