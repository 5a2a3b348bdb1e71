//! Currency converter command.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::services::currency::{Conversion, FileRateProvider, NoRateProvider};
use crate::services::{format_number, CurrencyConverter, RateProvider, RateSource};
use clap::Args;

/// Converted amounts are shown to the cent.
const MONEY_DECIMALS: usize = 2;

/// Convert an amount between currencies
///
/// Rates are read from `currency.rates_file` when configured. Without it, or
/// when the file can't be used, a built-in table of approximate rates is used
/// and the result is marked as approximate.
#[derive(Debug, Clone, Args)]
pub struct CurrencyArgs {
    /// Amount to convert
    #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
    pub amount: String,

    /// Source currency code (e.g. USD)
    #[arg(long, value_name = "CODE")]
    pub from: String,

    /// Target currency code (e.g. EUR)
    #[arg(long, value_name = "CODE")]
    pub to: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl CurrencyArgs {
    /// Execute the currency command
    pub fn execute(&self) -> CliResult<()> {
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| CliError::validation(format!("Invalid amount '{}'", self.amount)))?;

        let config = load_config()?;
        let base = config.currency.base.clone();
        let conversion = match &config.currency.rates_file {
            Some(path) => convert_with(FileRateProvider::new(path), &base, amount, self),
            None => convert_with(NoRateProvider, &base, amount, self),
        }?;

        if self.json {
            return print_json(&conversion);
        }

        let note = match conversion.source {
            RateSource::Live => "",
            RateSource::Fallback => " (approximate)",
        };
        println!(
            "{} {} = {} {}{}",
            format_number(conversion.amount, config.display.decimal_places),
            conversion.from,
            format_number(conversion.value, MONEY_DECIMALS),
            conversion.to,
            note
        );
        Ok(())
    }
}

fn convert_with<P: RateProvider>(
    provider: P,
    base: &str,
    amount: f64,
    args: &CurrencyArgs,
) -> CliResult<Conversion> {
    CurrencyConverter::new(provider, base)
        .convert(amount, &args.from, &args.to)
        .map_err(|e| CliError::validation(format!("{e}")))
}
