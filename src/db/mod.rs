//! Database module for dirtag
//!
//! Loads a flat tag database file into memory and implements the operations
//! over it. The file holds one record per line:
//!
//! ```text
//! <path> <tag1>:<tag2>:...:<tagN>
//! ```
//!
//! Queries run over the in-memory records. Mutations never touch the
//! in-memory copy: `add_tag`, `clear_tag` and `remove_file` stream a
//! transformed copy of the loaded records over the backing file, and
//! `new_file` appends one line to it. A `Database` is meant to be loaded once
//! per invocation and dropped after a single operation.

use std::borrow::Cow;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::Record;

pub mod error;
pub mod parser;
pub mod serialize;

pub use error::DbError;
pub use parser::{FormatError, parse};
pub use serialize::serialize;

/// Default database file name, resolved against the working directory
pub const DEFAULT_DATABASE: &str = ".dirtag";

/// How rewriting operations replace the database file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate the file and stream the new contents into it
    #[default]
    Truncate,
    /// Write a temporary file next to the database and rename it over
    Atomic,
}

/// In-memory view of a database file
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    records: Vec<Record>,
    /// Raw text was non-empty and did not end in a newline
    unterminated: bool,
    write_mode: WriteMode,
}

impl Database {
    /// Load and parse the database file at `path`
    ///
    /// # Examples
    /// ```no_run
    /// use dirtag::db::Database;
    /// let db = Database::open(".dirtag").unwrap();
    /// println!("{} records", db.len());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DbError::ConfigOpen` if the file is missing or unreadable and
    /// `DbError::Format` if a line is malformed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DbError::ConfigOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(path, &raw)
    }

    /// Build a database from already-read file contents
    ///
    /// # Errors
    ///
    /// Returns `DbError::Format` if a line is malformed.
    pub fn from_text<P: AsRef<Path>>(path: P, raw: &str) -> Result<Self, DbError> {
        let path = path.as_ref().to_path_buf();
        let records = parse(raw).map_err(|FormatError { line }| DbError::Format {
            path: path.clone(),
            line,
        })?;
        debug!(path = %path.display(), records = records.len(), "loaded database");

        Ok(Self {
            path,
            records,
            unterminated: !raw.is_empty() && !raw.ends_with('\n'),
            write_mode: WriteMode::default(),
        })
    }

    /// Select how rewriting operations replace the file
    #[must_use]
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose tags satisfy `query`, in file order
    pub fn find<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |record| record.satisfies(query))
    }

    /// Print the path of every record satisfying `query`, each followed by
    /// `delimiter`. Returns the number of matches.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn find_tag<W: Write>(&self, query: &str, delimiter: &str, out: &mut W) -> io::Result<usize> {
        let mut matched = 0;
        for record in self.find(query) {
            write!(out, "{}{delimiter}", record.path)?;
            matched += 1;
        }
        out.flush()?;
        debug!(query, matched, "find-tag");
        Ok(matched)
    }

    /// Append `tag` to every record whose path is `file` and rewrite the
    /// database. Returns the number of records changed; zero is not an error.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Io` if the database file cannot be written.
    pub fn add_tag(&self, file: &str, tag: &str) -> Result<usize, DbError> {
        let mut changed = 0;
        self.rewrite(|record| {
            if !record.has_path(file) {
                return Some(Cow::Borrowed(record));
            }
            changed += 1;
            let mut tags = record.tags.clone();
            tags.push(tag.to_string());
            Some(Cow::Owned(Record::new(record.path.clone(), tags)))
        })?;
        info!(file, tag, changed, "added tag");
        Ok(changed)
    }

    /// Reset the tags of every record whose path is `file` to `all` and
    /// rewrite the database. Returns the number of records changed.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Io` if the database file cannot be written.
    pub fn clear_tag(&self, file: &str) -> Result<usize, DbError> {
        let mut changed = 0;
        self.rewrite(|record| {
            if record.has_path(file) {
                changed += 1;
                Some(Cow::Owned(Record::unregistered(record.path.clone())))
            } else {
                Some(Cow::Borrowed(record))
            }
        })?;
        info!(file, changed, "cleared tags");
        Ok(changed)
    }

    /// Drop every record whose path is `file` and rewrite the database.
    /// Returns the number of records removed.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Io` if the database file cannot be written.
    pub fn remove_file(&self, file: &str) -> Result<usize, DbError> {
        let mut removed = 0;
        self.rewrite(|record| {
            if record.has_path(file) {
                removed += 1;
                None
            } else {
                Some(Cow::Borrowed(record))
            }
        })?;
        info!(file, removed, "removed file");
        Ok(removed)
    }

    /// Append a record for `file` tagged `all` (plus `tags`, if given).
    ///
    /// Existing records for the same path are not checked.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Io` if the database file cannot be opened for append
    /// or written.
    pub fn new_file(&self, file: &str, tags: Option<&str>) -> Result<(), DbError> {
        let mut handle = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| DbError::io(&self.path, e))?;

        let mut line = String::new();
        if self.unterminated {
            line.push('\n');
        }
        line.push_str(&serialize::new_file_line(file, tags));

        handle
            .write_all(line.as_bytes())
            .map_err(|e| DbError::io(&self.path, e))?;
        info!(file, tags = tags.unwrap_or_default(), "registered file");
        Ok(())
    }

    /// Replace the database file with the loaded records passed through
    /// `transform`; `None` drops a record.
    fn rewrite<'a, F>(&'a self, transform: F) -> Result<(), DbError>
    where
        F: FnMut(&'a Record) -> Option<Cow<'a, Record>>,
    {
        match self.write_mode {
            WriteMode::Truncate => self.rewrite_in_place(transform),
            WriteMode::Atomic => self.rewrite_atomic(transform),
        }
    }

    fn rewrite_in_place<'a, F>(&'a self, transform: F) -> Result<(), DbError>
    where
        F: FnMut(&'a Record) -> Option<Cow<'a, Record>>,
    {
        let file = File::create(&self.path).map_err(|e| DbError::io(&self.path, e))?;
        let mut out = BufWriter::new(file);
        self.write_transformed(&mut out, transform)
            .and_then(|()| out.flush())
            .map_err(|e| DbError::io(&self.path, e))
    }

    fn rewrite_atomic<'a, F>(&'a self, transform: F) -> Result<(), DbError>
    where
        F: FnMut(&'a Record) -> Option<Cow<'a, Record>>,
    {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(parent).map_err(|e| DbError::io(&self.path, e))?;

        #[cfg(unix)]
        {
            if let Ok(metadata) = fs::metadata(&self.path) {
                fs::set_permissions(temp.path(), metadata.permissions())
                    .map_err(|e| DbError::io(&self.path, e))?;
            }
        }

        {
            let mut out = BufWriter::new(temp.as_file_mut());
            self.write_transformed(&mut out, transform)
                .and_then(|()| out.flush())
                .map_err(|e| DbError::io(&self.path, e))?;
        }
        temp.as_file()
            .sync_all()
            .map_err(|e| DbError::io(&self.path, e))?;
        temp.persist(&self.path)
            .map_err(|e| DbError::io(&self.path, e.error))?;
        debug!(path = %self.path.display(), "replaced database atomically");
        Ok(())
    }

    fn write_transformed<'a, W, F>(&'a self, out: &mut W, mut transform: F) -> io::Result<()>
    where
        W: Write,
        F: FnMut(&'a Record) -> Option<Cow<'a, Record>>,
    {
        for record in &self.records {
            if let Some(line) = transform(record) {
                serialize::write_record(out, &line)?;
            }
        }
        Ok(())
    }
}
