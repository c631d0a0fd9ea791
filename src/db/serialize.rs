//! Database file serializer
//!
//! Renders records back to the `path tagspec` line format read by
//! [`parser::parse`](super::parser::parse).

use crate::{Record, UNTAGGED, tagspec};
use std::fmt;
use std::io::{self, Write};

impl fmt::Display for Record {
    /// `path tagspec`, without the line terminator
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.tagspec())
    }
}

/// Render a single record as a database line, newline included
#[must_use]
pub fn serialize(record: &Record) -> String {
    format!("{record}\n")
}

/// Write one record line to `out`
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_record<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(out, "{record}")
}

/// The line appended for a newly registered file: `file all` or `file all:tags`
#[must_use]
pub fn new_file_line(file: &str, tags: Option<&str>) -> String {
    match tags {
        Some(tags) if !tags.is_empty() => {
            format!("{file} {UNTAGGED}{}{tags}\n", tagspec::SEPARATOR)
        }
        _ => format!("{file} {UNTAGGED}\n"),
    }
}
