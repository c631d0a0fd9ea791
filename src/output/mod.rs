//! Output formatting for CLI display
//!
//! This module turns user-supplied delimiters into the bytes `find-tag`
//! prints, and formats the error line the binary writes on failure.

use colored::Colorize;
use std::borrow::Cow;
use std::fmt::Display;

/// Interpret backslash escapes in a delimiter given on the command line.
///
/// Supported: `\n`, `\t`, `\r`, `\0` and `\\`. Any other backslash sequence is
/// kept as written.
///
/// # Examples
///
/// ```
/// use dirtag::output::unescape_delimiter;
///
/// assert_eq!(unescape_delimiter("\\0"), "\0");
/// assert_eq!(unescape_delimiter(", "), ", ");
/// ```
#[must_use]
pub fn unescape_delimiter(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

/// The line printed to stderr when an invocation fails
#[must_use]
pub fn error_line(error: &impl Display) -> String {
    format!("{} {error}", "Error:".red())
}
