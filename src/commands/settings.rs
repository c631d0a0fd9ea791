//! init-settings command

use super::Result;
use crate::cli::Resolved;
use crate::config::DirtagConfig;
use crate::db::WriteMode;
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the init-settings command - persist the effective options
///
/// Writes to `target` when given, otherwise to the default settings path.
/// Returns the path written.
///
/// # Errors
/// Returns an error if the settings file cannot be written
pub fn execute(resolved: &Resolved, target: Option<&Path>) -> Result<PathBuf> {
    let settings = DirtagConfig {
        database: resolved.database.clone(),
        delimiter: resolved.delimiter.clone(),
        atomic_write: resolved.write_mode == WriteMode::Atomic,
    };

    let path = match target {
        Some(path) => {
            settings.save_to(path)?;
            path.to_path_buf()
        }
        None => settings.save()?,
    };
    info!(path = %path.display(), "wrote settings");
    Ok(path)
}
