//! Configuration management for the application.
//!
//! This module loads optional generator defaults from a TOML file with
//! platform-specific directory resolution. Every setting can be overridden
//! on the command line, and a missing file simply means defaults.

use crate::constants::{CONFIG_DIR_NAME, KEYMAP_FILE_NAME};
use crate::models::BoardProfile;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Header generation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Board used when the scancode file has no board line
    pub default_board: Option<BoardProfile>,
    /// Where to write the header when `--output` is not given
    pub output: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Generator defaults
    pub generator: GeneratorConfig,
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the configuration directory path.
    ///
    /// - Linux: `~/.config/fpc-matrix/`
    /// - macOS: `~/Library/Application Support/fpc-matrix/`
    /// - Windows: `%APPDATA%\fpc-matrix\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the default configuration file path.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default location.
    ///
    /// Returns defaults when no file exists or the platform has no config
    /// directory.
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::new()),
        }
    }

    /// Loads configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Board to use when the scancode file does not name one.
    pub fn default_board(&self) -> BoardProfile {
        self.generator.default_board.unwrap_or_default()
    }

    /// Header path to use when none is given on the command line.
    pub fn output_path(&self) -> PathBuf {
        self.generator
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(KEYMAP_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.default_board(), BoardProfile::TeensyLc);
        assert_eq!(config.output_path(), PathBuf::from("keymap.h"));
    }

    #[test]
    fn test_config_from_toml() {
        let config = Config::from_toml(
            "[generator]\ndefault_board = \"TEENSY32\"\noutput = \"firmware/keymap.h\"\n",
        )
        .unwrap();
        assert_eq!(config.default_board(), BoardProfile::Teensy32);
        assert_eq!(config.output_path(), PathBuf::from("firmware/keymap.h"));
    }

    #[test]
    fn test_config_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
        assert_eq!(Config::from_toml("[generator]\n").unwrap(), Config::default());
    }

    #[test]
    fn test_config_rejects_unknown_board() {
        assert!(Config::from_toml("[generator]\ndefault_board = \"TEENSY99\"\n").is_err());
    }

    #[test]
    fn test_config_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[generator]\ndefault_board = \"TEENSY40\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_board(), BoardProfile::Teensy40);
    }

    #[test]
    fn test_config_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
