//! Password generator command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::services::password::{generate, strength};
use crate::services::{PasswordOptions, PasswordStrength};
use clap::Args;
use serde::Serialize;

/// Generate random passwords
#[derive(Debug, Clone, Args)]
pub struct PasswordArgs {
    /// Password length (4-128)
    #[arg(short, long, value_name = "N", default_value_t = 16)]
    pub length: usize,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Number of passwords to generate
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub count: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct GeneratedPassword {
    password: String,
    strength: PasswordStrength,
}

impl PasswordArgs {
    /// Execute the password command
    pub fn execute(&self) -> CliResult<()> {
        if self.count == 0 {
            return Err(CliError::validation("Count must be at least 1"));
        }

        let options = PasswordOptions {
            length: self.length,
            uppercase: !self.no_uppercase,
            lowercase: !self.no_lowercase,
            digits: !self.no_digits,
            symbols: !self.no_symbols,
        };
        options
            .validate()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let passwords = (0..self.count)
            .map(|_| {
                generate(&options).map(|password| GeneratedPassword {
                    strength: strength(&password),
                    password,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        if self.json {
            return print_json(&passwords);
        }

        for generated in passwords {
            println!("{}  ({})", generated.password, generated.strength);
        }
        Ok(())
    }
}
