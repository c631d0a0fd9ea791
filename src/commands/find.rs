//! find-tag command

use super::Result;
use crate::db::Database;
use std::io::Write;

/// Execute the find-tag command - print matching paths, each followed by
/// `delimiter`
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn execute<W: Write>(db: &Database, tagspec: &str, delimiter: &str, out: &mut W) -> Result<usize> {
    Ok(db.find_tag(tagspec, delimiter, out)?)
}
