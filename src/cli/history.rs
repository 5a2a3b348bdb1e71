//! History commands.

use crate::cli::common::{load_config, open_history, print_json, CliError, CliResult};
use crate::models::{HistoryEntry, HistoryKind};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Show or clear tool history
#[derive(Debug, Clone, Args)]
pub struct HistoryArgs {
    /// History subcommand
    #[command(subcommand)]
    pub command: HistoryCommand,
}

/// History subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum HistoryCommand {
    /// List entries, oldest first
    List(HistoryListArgs),
    /// Delete all entries for a tool
    Clear(HistoryClearArgs),
}

/// List history entries
#[derive(Debug, Clone, Args)]
pub struct HistoryListArgs {
    /// Tool whose history to show (calculator or chat)
    #[arg(short, long, value_name = "TOOL", default_value = "calculator")]
    pub tool: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Clear history entries
#[derive(Debug, Clone, Args)]
pub struct HistoryClearArgs {
    /// Tool whose history to clear (calculator or chat)
    #[arg(short, long, value_name = "TOOL", default_value = "calculator")]
    pub tool: String,
}

#[derive(Debug, Serialize)]
struct HistoryResponse {
    tool: String,
    capacity: usize,
    entries: Vec<HistoryEntry>,
}

impl HistoryArgs {
    /// Execute the history command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            HistoryCommand::List(args) => args.execute(),
            HistoryCommand::Clear(args) => args.execute(),
        }
    }
}

impl HistoryListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let kind = parse_kind(&self.tool)?;
        let config = load_config()?;
        let entries = open_history(&config, kind)?.entries();

        if self.json {
            return print_json(&HistoryResponse {
                tool: kind.to_string(),
                capacity: kind.capacity(),
                entries,
            });
        }

        if entries.is_empty() {
            println!("No {kind} history");
            return Ok(());
        }

        for entry in entries {
            println!(
                "{}  {} = {}",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.input,
                entry.output
            );
        }
        Ok(())
    }
}

impl HistoryClearArgs {
    /// Execute the clear command
    pub fn execute(&self) -> CliResult<()> {
        let kind = parse_kind(&self.tool)?;
        let config = load_config()?;
        open_history(&config, kind)?
            .clear()
            .map_err(|e| CliError::io(format!("Failed to clear history: {e:#}")))?;
        println!("Cleared {kind} history");
        Ok(())
    }
}

fn parse_kind(tool: &str) -> CliResult<HistoryKind> {
    tool.parse()
        .map_err(|e| CliError::validation(format!("{e}")))
}
