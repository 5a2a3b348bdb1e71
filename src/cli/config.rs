//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::{Config, MAX_DECIMAL_PLACES};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Decimal places shown for conversion results (0-15)
    #[arg(long, value_name = "N")]
    decimal_places: Option<usize>,

    /// Print hex codes in uppercase (true or false)
    #[arg(long, value_name = "BOOL")]
    uppercase_hex: Option<bool>,

    /// Base currency for the rate table (e.g. USD)
    #[arg(long, value_name = "CODE")]
    currency_base: Option<String>,

    /// JSON file with live exchange rates
    #[arg(long, value_name = "FILE")]
    rates_file: Option<PathBuf>,

    /// Directory for favorites, history and saved colors
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    display: DisplayOutput,
    storage: StorageOutput,
    currency: CurrencyOutput,
}

#[derive(Serialize, Debug)]
struct DisplayOutput {
    decimal_places: usize,
    uppercase_hex: bool,
}

#[derive(Serialize, Debug)]
struct StorageOutput {
    data_dir: String,
}

#[derive(Serialize, Debug)]
struct CurrencyOutput {
    base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rates_file: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config)?;
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.decimal_places.is_none()
            && self.uppercase_hex.is_none()
            && self.currency_base.is_none()
            && self.rates_file.is_none()
            && self.data_dir.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --decimal-places, \
                 --uppercase-hex, --currency-base, --rates-file, or --data-dir",
            ));
        }

        // A broken file is reported rather than overwritten with defaults
        let mut config = load_config()?;

        if let Some(places) = self.decimal_places {
            if places > MAX_DECIMAL_PLACES {
                return Err(CliError::validation(format!(
                    "Decimal places must be between 0 and {MAX_DECIMAL_PLACES}"
                )));
            }
            config.display.decimal_places = places;
        }

        if let Some(uppercase) = self.uppercase_hex {
            config.display.uppercase_hex = uppercase;
        }

        if let Some(code) = &self.currency_base {
            let code = code.trim().to_uppercase();
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(CliError::validation(format!(
                    "Invalid currency code '{code}'. Expected three letters, e.g. USD"
                )));
            }
            config.currency.base = code;
        }

        if let Some(path) = &self.rates_file {
            if !path.is_file() {
                return Err(CliError::validation(format!(
                    "Rates file does not exist: {}",
                    path.display()
                )));
            }
            config.currency.rates_file = Some(path.clone());
        }

        // Apply data_dir if provided (create if doesn't exist)
        if let Some(path) = &self.data_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create data directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
            config.storage.data_dir = Some(path.clone());
        }

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn build_output(config: &Config) -> CliResult<ConfigOutput> {
    let data_dir = config
        .data_dir()
        .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e:#}")))?;

    Ok(ConfigOutput {
        display: DisplayOutput {
            decimal_places: config.display.decimal_places,
            uppercase_hex: config.display.uppercase_hex,
        },
        storage: StorageOutput {
            data_dir: data_dir.to_string_lossy().to_string(),
        },
        currency: CurrencyOutput {
            base: config.currency.base.clone(),
            rates_file: config
                .currency
                .rates_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
    })
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = build_output(config)?;

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) -> CliResult<()> {
    let output = build_output(config)?;

    println!("{APP_NAME} Configuration");
    println!("======================");
    println!();

    println!("Display:");
    println!("  Decimal Places: {}", output.display.decimal_places);
    println!("  Uppercase Hex: {}", output.display.uppercase_hex);
    println!();

    println!("Storage:");
    println!("  Data Directory: {}", output.storage.data_dir);
    println!();

    println!("Currency:");
    println!("  Base: {}", output.currency.base);
    match &output.currency.rates_file {
        Some(path) => println!("  Rates File: {path}"),
        None => println!("  Rates File: (not configured, using built-in rates)"),
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_args_empty() {
        let args = ConfigSetArgs {
            decimal_places: None,
            uppercase_hex: None,
            currency_base: None,
            rates_file: None,
            data_dir: None,
        };
        assert!(args.is_empty());
        assert_eq!(args.execute().unwrap_err().exit_code.code(), 1);
    }

    #[test]
    fn test_build_output_omits_unset_rates_file() {
        let mut config = Config::new();
        config.storage.data_dir = Some(PathBuf::from("/tmp/minitools-data"));
        let output = build_output(&config).unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["display"]["decimal_places"], 6);
        assert_eq!(json["currency"]["base"], "USD");
        assert!(json["currency"].get("rates_file").is_none());
    }
}
