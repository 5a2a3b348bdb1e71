//! Tool catalog command.

use crate::cli::common::{load_config, open_favorites, print_json, CliResult};
use crate::models::TOOLS;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Browse the tool catalog
#[derive(Debug, Clone, Args)]
pub struct ToolsArgs {
    /// Tools subcommand
    #[command(subcommand)]
    pub command: ToolsCommand,
}

/// Tools subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ToolsCommand {
    /// List every tool, favorites marked with `*`
    List(ToolsListArgs),
}

/// List every tool
#[derive(Debug, Clone, Args)]
pub struct ToolsListArgs {
    /// Only show favorites
    #[arg(long)]
    pub favorites: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ToolItem {
    slug: &'static str,
    name: &'static str,
    description: &'static str,
    favorite: bool,
}

#[derive(Debug, Serialize)]
struct ToolsResponse {
    tools: Vec<ToolItem>,
    count: usize,
}

impl ToolsArgs {
    /// Execute the tools command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ToolsCommand::List(args) => args.execute(),
        }
    }
}

impl ToolsListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let favorites = open_favorites(&config)?;

        let tools: Vec<ToolItem> = TOOLS
            .iter()
            .map(|tool| ToolItem {
                slug: tool.slug,
                name: tool.name,
                description: tool.description,
                favorite: favorites.contains(tool.slug),
            })
            .filter(|item| !self.favorites || item.favorite)
            .collect();

        if self.json {
            let count = tools.len();
            return print_json(&ToolsResponse { tools, count });
        }

        for tool in &tools {
            let marker = if tool.favorite { '*' } else { ' ' };
            println!("{marker} {:<22} {}", tool.slug, tool.description);
        }
        Ok(())
    }
}
