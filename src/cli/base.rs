//! Number base converter command.

use crate::cli::common::{CliError, CliResult};
use crate::services::{convert_base, NumberBase};
use clap::Args;

/// Convert an integer between number bases
#[derive(Debug, Clone, Args)]
pub struct BaseArgs {
    /// Value to convert (prefixes 0b/0o/0x and `_` separators allowed)
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Source base (binary, octal, decimal, hex, or 2/8/10/16)
    #[arg(long, value_name = "BASE")]
    pub from: String,

    /// Target base
    #[arg(long, value_name = "BASE")]
    pub to: String,
}

impl BaseArgs {
    /// Execute the base command
    pub fn execute(&self) -> CliResult<()> {
        let from: NumberBase = self
            .from
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;
        let to: NumberBase = self
            .to
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let result = convert_base(&self.value, from, to)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        println!("{result}");
        Ok(())
    }
}
