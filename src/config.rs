//! Configuration module for dirtag
//!
//! Optional user settings, stored as TOML in the user's config directory
//! (`~/.config/dirtag/config.toml` on Linux). Command-line flags override
//! anything set here; a missing settings file means built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::db::{DEFAULT_DATABASE, WriteMode};

/// Environment variable that points at an alternative settings file
pub const SETTINGS_ENV: &str = "DIRTAG_SETTINGS";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DirtagConfig {
    /// Database file used when `--config` is not given
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Separator printed after each `find-tag` match
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Replace the database via temp file + rename instead of truncating it
    #[serde(default)]
    pub atomic_write: bool,
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE)
}

fn default_delimiter() -> String {
    "\n".to_string()
}

impl Default for DirtagConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            delimiter: default_delimiter(),
            atomic_write: false,
        }
    }
}

impl DirtagConfig {
    /// Get the path to the settings file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DIRTAG_SETTINGS` is unset and the system config
    /// directory cannot be determined.
    pub fn settings_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("dirtag").join("config.toml"))
    }

    /// Load settings from the default location, falling back to defaults
    /// when there is no settings file (or no config directory at all)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the settings file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::settings_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load settings from `path`; a missing file yields defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save settings to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the location cannot be determined or written.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::settings_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save settings to `path`, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the settings
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    #[must_use]
    pub const fn write_mode(&self) -> WriteMode {
        if self.atomic_write {
            WriteMode::Atomic
        } else {
            WriteMode::Truncate
        }
    }
}
