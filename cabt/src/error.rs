//! Error handling module for the cabt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use caboose_lex::ConfigError;
use thiserror::Error;

/// Main error type for the cabt CLI application.
#[derive(Error, Debug)]
pub enum CabtError {
    /// Error when loading or parsing the configuration file fails.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The mode settings were rejected.
    #[error(transparent)]
    Mode(#[from] ConfigError),

    /// `reindent --check` found lines that would change.
    #[error("{0} line(s) would be re-indented")]
    CheckFailed(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CabtError.
pub type Result<T> = std::result::Result<T, CabtError>;
