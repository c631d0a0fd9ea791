//! Database-specific error types
//!
//! All three kinds are fatal for a single invocation: the binary reports
//! them with an `Error: ` prefix and exits with status 1.
//!
//! # Error Types
//!
//! - **`ConfigOpen`**: the database file is missing or unreadable at load
//! - **`Format`**: a line has a path but no tagspec field
//! - **`Io`**: the database file could not be opened or written for a mutation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Database-specific errors
#[derive(Debug, Error)]
pub enum DbError {
    /// The database file could not be opened or read
    #[error("could not open file {}: {source}", .path.display())]
    ConfigOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line is missing its tagspec field
    #[error("file {} wrongly formatted (line {line})", .path.display())]
    Format { path: PathBuf, line: usize },

    /// Writing the database back failed
    #[error("could not write file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DbError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
