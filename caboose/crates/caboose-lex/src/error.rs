//! Error types for caboose-lex.
//!
//! Tokenizing never fails. Errors only come out of building a
//! [`Mode`](crate::Mode) from configuration.

use thiserror::Error;

/// Error type for mode configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid TOML for a mode.
    #[error("Failed to parse mode configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A numeric setting is out of range.
    #[error("Invalid mode configuration: {field} must be between 1 and {max}, got {value}")]
    OutOfRange {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
