//! Unit conversion command.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::models::UnitCategory;
use crate::services::conversion::{convert_input, ConversionOutcome};
use crate::services::format_number;
use clap::Args;
use serde::Serialize;

/// Convert a value between units of one category
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Value to convert
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Source unit (e.g. meter, fahrenheit, gigabyte)
    #[arg(long, value_name = "UNIT")]
    pub from: String,

    /// Target unit
    #[arg(long, value_name = "UNIT")]
    pub to: String,

    /// Unit category (length, weight, temperature, volume, time, digital)
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConvertResponse<'a> {
    input: &'a str,
    from: &'a str,
    to: &'a str,
    category: UnitCategory,
    /// "ok" or "invalid_input"
    status: &'static str,
    value: Option<f64>,
    formatted: Option<String>,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let category: UnitCategory = self
            .category
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;
        let from = self.from.trim().to_lowercase();
        let to = self.to.trim().to_lowercase();

        let outcome = convert_input(&self.value, &from, &to, category)
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let formatted = outcome
            .value()
            .map(|v| format_number(v, config.display.decimal_places));

        if self.json {
            return print_json(&ConvertResponse {
                input: self.value.trim(),
                from: &from,
                to: &to,
                category,
                status: if outcome.value().is_some() {
                    "ok"
                } else {
                    "invalid_input"
                },
                value: outcome.value(),
                formatted,
            });
        }

        match formatted {
            Some(text) => println!("{} {} = {} {}", self.value.trim(), from, text, to),
            None => println!("{}", ConversionOutcome::InvalidInput),
        }

        Ok(())
    }
}
