//! Error types for the contacts manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every file and parse failure is classified into one of these kinds before it reaches
//! the user.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the contact file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The file or its directory could not be opened, read, created or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line in the contact file could not be reconstructed into a contact
    #[error("Malformed line {line_number} ({line:?}): {reason}")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: String,
    },
}

impl PersistenceError {
    /// Wrap an `std::io::Error` with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Internal-consistency failure in phone formatting.
///
/// Callers validate raw digits before formatting, so this only surfaces on a bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Raw digit string was neither 7 nor 10 characters long
    #[error("Cannot format {0} digits as a phone number (expected 7 or 10)")]
    UnsupportedLength(usize),

    /// Raw input contained something other than ASCII digits
    #[error("Raw phone number must contain only digits: {0:?}")]
    NotDigits(String),
}

/// Top-level failure of an interactive session.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Reading from or writing to the terminal failed, or input ended
    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this failure.
    ///
    /// A corrupt data file gets its own status so scripts can tell it apart from
    /// ordinary I/O trouble.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Persistence(PersistenceError::MalformedLine { .. }) => 1,
            AppError::Persistence(PersistenceError::Io { .. }) => 2,
            AppError::Console(_) => 3,
            AppError::Config(_) => 78,
        }
    }
}

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with AppError
pub type AppResult<T> = Result<T, AppError>;
