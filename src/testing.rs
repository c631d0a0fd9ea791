//! Testing utilities for dirtag
//!
//! This module provides `TestDb`, a database file living in its own
//! temporary directory, so tests never touch a real `.dirtag`.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use crate::db::{DEFAULT_DATABASE, Database};

/// Temporary database file, removed together with its directory on drop
///
/// # Examples
/// ```ignore
/// let test_db = TestDb::new("a.txt all\n");
/// test_db.db().add_tag("a.txt", "x").unwrap();
/// assert_eq!(test_db.contents(), "a.txt all:x\n");
/// ```
pub struct TestDb {
    _dir: TempDir,
    path: PathBuf,
    db: Database,
}

impl TestDb {
    /// Write `contents` to a fresh database file and load it
    ///
    /// # Panics
    /// Panics if the file cannot be written or does not parse.
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(DEFAULT_DATABASE);
        fs::write(&path, contents).expect("Failed to write test database");
        let db = Database::open(&path).expect("Failed to open test database");

        Self { _dir: dir, path, db }
    }

    /// Get a reference to the loaded database
    #[must_use]
    pub const fn db(&self) -> &Database {
        &self.db
    }

    /// Get the path to the database file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current contents of the database file on disk
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn contents(&self) -> String {
        fs::read_to_string(&self.path).expect("Failed to read test database")
    }

    /// Load the file again, picking up rewrites done through `db()`
    ///
    /// # Panics
    /// Panics if the file no longer parses.
    #[must_use]
    pub fn reload(&self) -> Database {
        Database::open(&self.path).expect("Failed to reload test database")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_basic() {
        let test_db = TestDb::new("a.txt all\n");
        assert_eq!(test_db.db().len(), 1);
        assert!(test_db.path().exists());
        assert!(test_db.path().ends_with(".dirtag"));
    }

    #[test]
    fn test_db_cleanup() {
        let path = {
            let test_db = TestDb::new("");
            assert!(test_db.db().is_empty());
            test_db.path().to_path_buf()
        };

        assert!(!path.exists());
    }

    #[test]
    fn test_reload_sees_rewrite() {
        let test_db = TestDb::new("a.txt all\n");
        test_db.db().add_tag("a.txt", "x").unwrap();

        let reloaded = test_db.reload();
        assert_eq!(reloaded.records()[0].tags, vec!["all", "x"]);
    }
}
