//! add-tag and clear-tag commands

use super::Result;
use crate::db::Database;
use tracing::info;

/// Execute the add-tag command - append `tag` to every record for `file`
///
/// A file that is not in the database leaves it unchanged.
///
/// # Errors
/// Returns an error if the database file cannot be rewritten
pub fn add_tag(db: &Database, file: &str, tag: &str) -> Result<()> {
    if db.add_tag(file, tag)? == 0 {
        info!(file, "not in database, nothing tagged");
    }
    Ok(())
}

/// Execute the clear-tag command - reset every record for `file` to `all`
///
/// # Errors
/// Returns an error if the database file cannot be rewritten
pub fn clear_tag(db: &Database, file: &str) -> Result<()> {
    if db.clear_tag(file)? == 0 {
        info!(file, "not in database, nothing cleared");
    }
    Ok(())
}
