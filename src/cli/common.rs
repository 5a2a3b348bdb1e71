//! Shared CLI plumbing: error type, exit codes, and store helpers.

use serde::Serialize;
use std::fmt;

use crate::config::Config;
use crate::models::{HistoryEntry, HistoryKind, SavedColor};
use crate::store::{
    Favorites, History, JsonFileStore, SavedColors, FAVORITES_KEY, SAVED_COLORS_KEY,
};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid arguments or input
    ValidationError = 1,
    /// Filesystem or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to report
    pub exit_code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Invalid user input (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or serialization failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration, mapping failures to an I/O error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Prints `value` as compact JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{}", json);
    Ok(())
}

/// Opens the persisted favorites list.
pub fn open_favorites(config: &Config) -> CliResult<Favorites<JsonFileStore<Vec<String>>>> {
    let dir = data_dir(config)?;
    let store = JsonFileStore::open_in(&dir, FAVORITES_KEY)
        .map_err(|e| CliError::io(format!("Failed to open favorites: {e:#}")))?;
    Ok(Favorites::new(store))
}

/// Opens the persisted history for `kind`.
pub fn open_history(
    config: &Config,
    kind: HistoryKind,
) -> CliResult<History<JsonFileStore<Vec<HistoryEntry>>>> {
    let dir = data_dir(config)?;
    let store = JsonFileStore::open_in(&dir, kind.storage_key())
        .map_err(|e| CliError::io(format!("Failed to open {kind} history: {e:#}")))?;
    Ok(History::new(store, kind))
}

/// Opens the persisted saved colors.
pub fn open_saved_colors(
    config: &Config,
) -> CliResult<SavedColors<JsonFileStore<Vec<SavedColor>>>> {
    let dir = data_dir(config)?;
    let store = JsonFileStore::open_in(&dir, SAVED_COLORS_KEY)
        .map_err(|e| CliError::io(format!("Failed to open saved colors: {e:#}")))?;
    Ok(SavedColors::new(store))
}

fn data_dir(config: &Config) -> CliResult<std::path::PathBuf> {
    config
        .data_dir()
        .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e:#}")))
}
