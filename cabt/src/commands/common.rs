//! Common utilities for cabt commands.
//!
//! This module provides shared constants and helpers used across all
//! command implementations to ensure consistency.

use std::path::Path;

use caboose_lex::stream::{CharStream, LineStream};
use caboose_lex::{Mode, ModeConfig, Style};

use crate::error::{CabtError, Result};

/// Error message constants for consistent error reporting.
pub mod error_messages {
    /// No input files were given.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";
}

/// Builds the editor mode from validated settings.
pub fn build_mode(config: &ModeConfig) -> Result<Mode> {
    Ok(Mode::new(config)?)
}

/// Reads a source file after checking that it is a regular file.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CabtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(CabtError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), "reading source");
    Ok(std::fs::read_to_string(path)?)
}

/// Rejects an empty file list.
pub fn require_files<P>(files: &[P]) -> Result<()> {
    if files.is_empty() {
        return Err(CabtError::Validation(error_messages::NO_INPUT_FILES.to_string()));
    }
    Ok(())
}

/// Screen width of a line's leading whitespace.
pub fn line_indentation(line: &str, tab_size: usize) -> usize {
    LineStream::new(line, tab_size).indentation()
}

/// Label printed for a token style.
pub fn style_label(style: Option<Style>) -> &'static str {
    style.map_or("punct", |s| s.as_str())
}
