//! Dirtag - file tagging backed by a flat, human-editable database file
//!
//! This library loads a `.dirtag` style database (one `path tag1:tag2` line
//! per file), answers subset queries over it and rewrites it for the
//! add/clear/remove operations.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod logging;
pub mod output;
pub mod tagspec;

#[cfg(test)]
pub mod testing;

/// Sentinel tag written for files that have been registered but not tagged yet
pub const UNTAGGED: &str = "all";

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DirtagError {
    /// Database load/parse/write error
    #[error(transparent)]
    DbError(#[from] db::DbError),
    /// Represents a settings file error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error outside the database file (stdout, settings)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// One database entry: a path paired with its tags
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub path: String,
    pub tags: Vec<String>,
}

impl Record {
    /// Create a new Record
    #[must_use]
    pub const fn new(path: String, tags: Vec<String>) -> Self {
        Self { path, tags }
    }

    /// A freshly registered file, carrying only the `all` sentinel
    #[must_use]
    pub fn unregistered(path: impl Into<String>) -> Self {
        Self::new(path.into(), vec![UNTAGGED.to_string()])
    }

    /// The record's tags in database form, joined by `:`
    #[must_use]
    pub fn tagspec(&self) -> String {
        tagspec::join(&self.tags)
    }

    #[must_use]
    pub fn has_path(&self, path: &str) -> bool {
        self.path == path
    }

    /// Whether every tag of `query` is carried by this record.
    ///
    /// An empty query is satisfied by every record.
    #[must_use]
    pub fn satisfies(&self, query: &str) -> bool {
        tagspec::tagspec_satisfies(&self.tagspec(), query)
    }
}
