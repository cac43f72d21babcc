//! Mode configuration.
//!
//! The only behavioral input is the indent unit. Tab size feeds the stock
//! [`LineStream`](crate::stream::LineStream) column computation, and the extra
//! word lists extend the classification tables.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Largest accepted indent unit or tab size.
pub const MAX_WIDTH: u32 = 64;

/// Settings for building a [`Mode`](crate::Mode).
///
/// # Example
///
/// ```
/// use caboose_lex::ModeConfig;
///
/// let config = ModeConfig::from_toml_str("indent_unit = 4").unwrap();
/// assert_eq!(config.indent_unit, 4);
/// assert_eq!(config.tab_size, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeConfig {
    /// Columns added per nesting level.
    #[serde(default = "default_indent_unit")]
    pub indent_unit: u32,

    /// Width of a tab stop when computing screen columns.
    #[serde(default = "default_tab_size")]
    pub tab_size: u32,

    /// Words classified as keywords on top of the built-in table.
    #[serde(default)]
    pub extra_keywords: Vec<String>,

    /// Words classified as atoms on top of the built-in table.
    #[serde(default)]
    pub extra_atoms: Vec<String>,
}

fn default_indent_unit() -> u32 {
    2
}

fn default_tab_size() -> u32 {
    4
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            indent_unit: default_indent_unit(),
            tab_size: default_tab_size(),
            extra_keywords: Vec::new(),
            extra_atoms: Vec::new(),
        }
    }
}

impl ModeConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ModeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the widths are within `1..=MAX_WIDTH`.
    pub fn validate(&self) -> Result<()> {
        check_width("indent_unit", self.indent_unit)?;
        check_width("tab_size", self.tab_size)?;
        Ok(())
    }
}

fn check_width(field: &'static str, value: u32) -> Result<()> {
    if (1..=MAX_WIDTH).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            max: MAX_WIDTH,
        })
    }
}
