//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};

/// Largest supported number of displayed decimal places.
pub const MAX_DECIMAL_PLACES: usize = 15;

/// Result display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places shown for conversion results (trailing zeros stripped)
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,
    /// Print hex codes as "#RRGGBB" (true) or "#rrggbb" (false)
    #[serde(default = "default_uppercase_hex")]
    pub uppercase_hex: bool,
}

/// Default decimal places (6)
fn default_decimal_places() -> usize {
    6
}

/// Default hex case (uppercase)
fn default_uppercase_hex() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            uppercase_hex: default_uppercase_hex(),
        }
    }
}

/// Where persisted tool state (favorites, history, saved colors) lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Data directory override; defaults to `<config dir>/data`
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Currency converter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Base currency the rate table is quoted against
    #[serde(default = "default_currency_base")]
    pub base: String,
    /// JSON file with live rates; the built-in table is used when unset or unreadable
    #[serde(default)]
    pub rates_file: Option<PathBuf>,
}

/// Default base currency (USD)
fn default_currency_base() -> String {
    "USD".to_string()
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base: default_currency_base(),
            rates_file: None,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/minitools/config.toml`
/// - macOS: `~/Library/Application Support/minitools/config.toml`
/// - Windows: `%APPDATA%\minitools\config.toml`
///
/// `MINITOOLS_CONFIG_DIR` overrides the directory on every platform.
///
/// # Validation
///
/// - `decimal_places` must be at most 15
/// - `currency.base` must be a three-letter code
/// - `data_dir`, if set, must not point at an existing file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Result display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Persisted state location
    #[serde(default)]
    pub storage: StorageConfig,
    /// Currency converter settings
    #[serde(default)]
    pub currency: CurrencyConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - `$MINITOOLS_CONFIG_DIR` if set
    /// - Linux: `~/.config/minitools/`
    /// - macOS: `~/Library/Application Support/minitools/`
    /// - Windows: `%APPDATA%\minitools\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory holding persisted tool state.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("data")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.display.decimal_places > MAX_DECIMAL_PLACES {
            anyhow::bail!(
                "decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
                self.display.decimal_places
            );
        }

        let base = &self.currency.base;
        if base.len() != 3 || !base.chars().all(|c| c.is_ascii_uppercase()) {
            anyhow::bail!("Currency base must be a three-letter uppercase code, got '{base}'");
        }

        if let Some(dir) = &self.storage.data_dir {
            if dir.is_file() {
                anyhow::bail!("Data directory path is a file: {}", dir.display());
            }
        }

        Ok(())
    }
}
