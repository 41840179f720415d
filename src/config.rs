//! Configuration management for the contacts manager.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Default folder holding persisted state.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default name of the contact file inside the data folder.
pub const DEFAULT_DATA_FILE: &str = "contacts.txt";

/// Configuration for the contacts manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base folder for persisted state (default: "data")
    pub data_dir: PathBuf,

    /// Name of the contact file within `data_dir` (default: "contacts.txt")
    pub data_file: String,

    /// Log filter used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Build a configuration for an explicit directory and file name.
    pub fn new(data_dir: impl Into<PathBuf>, data_file: impl Into<String>) -> Self {
        Config {
            data_dir: data_dir.into(),
            data_file: data_file.into(),
            ..Config::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DATA_DIR`: Data directory (default: "data")
    /// - `CONTACTS_DATA_FILE`: Contact file name (default: "contacts.txt")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a broken one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let data_dir = match env::var("CONTACTS_DATA_DIR") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_DATA_DIR".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_DATA_DIR),
        };

        let data_file =
            env::var("CONTACTS_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
        Self::validate_file_name("CONTACTS_DATA_FILE", &data_file)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_dir,
            data_file,
            log_level,
        })
    }

    /// Full path of the contact file.
    pub fn data_file_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file)
    }

    /// The data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The file must live directly inside the data directory.
    fn validate_file_name(var_name: &str, file_name: &str) -> ConfigResult<()> {
        if file_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        if file_name.contains('/')
            || file_name.contains('\\')
            || file_name == "."
            || file_name == ".."
        {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a bare file name, got: {}", file_name),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            data_file: DEFAULT_DATA_FILE.to_string(),
            log_level: "error".to_string(),
        }
    }
}
