//! Database file parser
//!
//! Turns the full text of a database file into [`Record`]s, in file order.
//! Each non-blank line is `path tagspec`, separated by any whitespace run.

use crate::{Record, tagspec};
use thiserror::Error;

/// A line that cannot be turned into a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("malformed record on line {line}")]
pub struct FormatError {
    /// 1-based line number
    pub line: usize,
}

/// Parse a whole database file.
///
/// * Blank and whitespace-only lines are skipped.
/// * `path` followed by whitespace and nothing else gives a record with no tags.
/// * `path` running straight into end-of-input is a [`FormatError`]: the
///   file was cut off before the field separator.
/// * Everything after the first whitespace run is the tagspec, so lines
///   written for paths or tags containing spaces still load.
///
/// # Errors
///
/// Returns `FormatError` carrying the offending line number.
///
/// # Examples
///
/// ```
/// use dirtag::db::parser::parse;
///
/// let records = parse("report.pdf work:urgent\nnotes.md all\n").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].tags, vec!["work", "urgent"]);
/// assert!(parse("report.pdf").is_err());
/// ```
pub fn parse(raw: &str) -> Result<Vec<Record>, FormatError> {
    let mut records = Vec::new();
    let mut lines = raw.split('\n').enumerate().peekable();

    while let Some((index, line)) = lines.next() {
        let at_end_of_input = lines.peek().is_none();
        if let Some(record) = parse_line(line, at_end_of_input, index + 1)? {
            records.push(record);
        }
    }

    Ok(records)
}

fn parse_line(line: &str, at_end_of_input: bool, number: usize) -> Result<Option<Record>, FormatError> {
    let body = line.trim_start();
    if body.is_empty() {
        return Ok(None);
    }

    let path_end = body.find(char::is_whitespace).unwrap_or(body.len());
    let (path, rest) = body.split_at(path_end);

    // `path` with no separator after it and nothing left to read
    if rest.is_empty() && at_end_of_input {
        return Err(FormatError { line: number });
    }

    // Everything after the separator is the tagspec, inner whitespace included
    let tags = tagspec::split(rest.trim());
    Ok(Some(Record::new(path.to_string(), tags)))
}
