//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for dirtag using the `clap` crate.
//! Every database command takes plain positional arguments; global options
//! select the database file, the `find-tag` delimiter and the write mode.
//!
//! # Commands
//!
//! - **add-tag**: Append a tag to a file's record
//! - **clear-tag**: Reset a file's tags to `all`
//! - **find-tag**: List files carrying every tag of a tagspec
//! - **remove-file**: Drop a file from the database
//! - **new-file**: Register a file, optionally with initial tags
//! - **completions** / **init-settings**: housekeeping, no database access
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use dirtag::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["dirtag", "-c", "tags.db", "add-tag", "a.txt", "work"]);
//! assert!(matches!(cli.command, Some(Commands::AddTag { .. })));
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use clap::error::ErrorKind;
use clap_complete::Shell;
use ::config::ConfigError;
use std::io::Write;
use std::path::PathBuf;

use crate::config::DirtagConfig;
use crate::db::WriteMode;
use crate::output::unescape_delimiter;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "dirtag")]
#[command(about = "dirtag - file tagging tool", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Database file to use [default: .dirtag]
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Delimiter printed after each find-tag match (\n, \t, \0 escapes allowed)
    #[arg(short = 'd', long = "delimiter", visible_alias = "delimeter", value_name = "DELIM", global = true)]
    pub delimiter: Option<String>,

    /// Replace the database through a temp file and rename
    #[arg(long = "atomic", global = true)]
    pub atomic: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a tag to given file
    #[command(visible_alias = "a")]
    AddTag {
        /// Path as recorded in the database
        file: String,
        /// Tag to append
        tag: String,
    },

    /// Clear tags of given file
    ClearTag {
        /// Path as recorded in the database
        file: String,
    },

    /// List all files with given tags (colon-separated, all must match)
    #[command(visible_alias = "f")]
    FindTag {
        /// Tags to look for, e.g. work:urgent
        tagspec: String,
    },

    /// Remove given file from the database
    #[command(visible_alias = "r")]
    RemoveFile {
        /// Path as recorded in the database
        file: String,
    },

    /// Add a new file to the database
    #[command(visible_alias = "n")]
    NewFile {
        /// Path to record
        file: String,
        /// Initial tags, colon-separated
        tagspec: Option<String>,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Write the effective settings to the settings file
    InitSettings,
}

impl Commands {
    /// Whether the command depends on the user settings file
    #[must_use]
    pub const fn reads_settings(&self) -> bool {
        !matches!(self, Self::Completions { .. })
    }
}

/// Exit status for an argument-parsing outcome: only `--version` succeeds,
/// help is reported like any other usage error
#[must_use]
pub const fn parse_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Options after merging the command line over the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub database: PathBuf,
    pub delimiter: String,
    pub write_mode: WriteMode,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Help and usage errors print clap's message and exit with status 1;
    /// `--version` exits with status 0.
    #[must_use]
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                // Nowhere left to report an unwritable stderr; the exit status still does
                let _ = err.print();
                std::process::exit(parse_exit_code(err.kind()));
            }
        }
    }

    /// Settings this invocation runs under. Commands that never consult the
    /// settings file get the defaults without it being read.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the settings file exists but cannot be parsed.
    pub fn settings(&self) -> Result<DirtagConfig, ConfigError> {
        self.settings_with(DirtagConfig::load)
    }

    fn settings_with<F>(&self, load: F) -> Result<DirtagConfig, ConfigError>
    where
        F: FnOnce() -> Result<DirtagConfig, ConfigError>,
    {
        match &self.command {
            Some(command) if !command.reads_settings() => Ok(DirtagConfig::default()),
            _ => load(),
        }
    }

    /// Merge command-line options over `settings`; flags win
    #[must_use]
    pub fn resolve(&self, settings: &DirtagConfig) -> Resolved {
        let delimiter = self.delimiter.as_deref().unwrap_or(&settings.delimiter);
        let write_mode = if self.atomic {
            WriteMode::Atomic
        } else {
            settings.write_mode()
        };

        Resolved {
            database: self.config.clone().unwrap_or_else(|| settings.database.clone()),
            delimiter: unescape_delimiter(delimiter).into_owned(),
            write_mode,
        }
    }
}

/// Write a completion script for `shell` to `buf`
pub fn generate_completions<W: Write>(shell: Shell, buf: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}
