//! new-file and remove-file commands

use super::Result;
use crate::db::Database;
use tracing::info;

/// Execute the new-file command - register `file`, optionally with tags
///
/// # Errors
/// Returns an error if the database file cannot be appended to
pub fn new_file(db: &Database, file: &str, tagspec: Option<&str>) -> Result<()> {
    if db.records().iter().any(|record| record.has_path(file)) {
        info!(file, "already registered, adding another record");
    }
    db.new_file(file, tagspec)?;
    Ok(())
}

/// Execute the remove-file command - drop every record for `file`
///
/// # Errors
/// Returns an error if the database file cannot be rewritten
pub fn remove_file(db: &Database, file: &str) -> Result<()> {
    if db.remove_file(file)? == 0 {
        info!(file, "not in database, nothing removed");
    }
    Ok(())
}
