//! Calculator command.

use crate::cli::common::{load_config, open_history, CliError, CliResult};
use crate::models::{HistoryEntry, HistoryKind};
use crate::services::evaluate_sequence;
use clap::Args;
use tracing::debug;

/// Evaluate a calculator key sequence
///
/// Keys: digits, `.`, `+ - * /` (also `x ×  ÷`), `=`, `%`, `~` (toggle sign),
/// `<` (backspace) and `c` (clear). Operators chain left to right.
#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// Key sequence, e.g. "12+3*2="
    #[arg(value_name = "KEYS", allow_hyphen_values = true)]
    pub keys: String,

    /// Don't record the result in the calculator history
    #[arg(long)]
    pub no_history: bool,
}

impl CalcArgs {
    /// Execute the calc command
    pub fn execute(&self) -> CliResult<()> {
        let keys: String = self.keys.chars().filter(|c| !c.is_whitespace()).collect();
        if keys.is_empty() {
            return Err(CliError::validation("Key sequence is empty"));
        }

        let result = evaluate_sequence(&keys).map_err(|e| CliError::validation(format!("{e:#}")))?;
        println!("{result}");

        if !self.no_history {
            let config = load_config()?;
            let mut history = open_history(&config, HistoryKind::Calculator)?;
            let input = keys.trim_end_matches('=').to_string();
            history
                .record(HistoryEntry::now(input, result))
                .map_err(|e| CliError::io(format!("Failed to record history: {e:#}")))?;
            debug!("Recorded calculator history entry");
        }

        Ok(())
    }
}
