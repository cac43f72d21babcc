//! Configuration module for the cabt CLI.
//!
//! This module finds and loads the `cabt.toml` file. Mode settings live in
//! its `[mode]` table and are handed to `caboose-lex` as they are.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use caboose_lex::ModeConfig;

use crate::error::{CabtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "cabt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Editor mode settings.
    #[serde(default)]
    pub mode: ModeConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/cabt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CabtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| CabtError::Config(format!("Failed to parse configuration: {}", e)))?;
        config.mode.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides to the mode settings.
    pub fn with_overrides(mut self, indent_unit: Option<u32>, tab_size: Option<u32>) -> Result<Self> {
        if let Some(indent_unit) = indent_unit {
            self.mode.indent_unit = indent_unit;
        }
        if let Some(tab_size) = tab_size {
            self.mode.tab_size = tab_size;
        }
        self.mode.validate()?;
        Ok(self)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("cabt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("cabt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.mode, ModeConfig::default());
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &config_path,
            "verbose = true\n\n[mode]\nindent_unit = 4\nextra_keywords = [\"return\"]\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.mode.indent_unit, 4);
        assert_eq!(config.mode.tab_size, 4);
        assert_eq!(config.mode.extra_keywords, vec!["return".to_string()]);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/cabt.toml"));
        assert!(matches!(result, Err(CabtError::Config(_))));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Config::from_toml_str("[mode]\nindent = 4\n");
        assert!(matches!(result, Err(CabtError::Config(_))));
    }

    #[test]
    fn test_invalid_width_rejected() {
        let result = Config::from_toml_str("[mode]\ntab_size = 0\n");
        assert!(matches!(result, Err(CabtError::Mode(_))));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some(8), None).unwrap();
        assert_eq!(config.mode.indent_unit, 8);
        assert_eq!(config.mode.tab_size, 4);

        assert!(Config::default().with_overrides(None, Some(0)).is_err());
    }
}
