//! Favorite tools commands.

use crate::cli::common::{load_config, open_favorites, print_json, CliError, CliResult};
use crate::models::find_tool;
use clap::{Args, Subcommand};

/// Manage favorite tools
#[derive(Debug, Clone, Args)]
pub struct FavoritesArgs {
    /// Favorites subcommand
    #[command(subcommand)]
    pub command: FavoritesCommand,
}

/// Favorites subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum FavoritesCommand {
    /// List favorite tools in the order they were added
    List(FavoritesListArgs),
    /// Add a tool to favorites, or remove it if already there
    Toggle(FavoritesToggleArgs),
}

/// List favorite tools
#[derive(Debug, Clone, Args)]
pub struct FavoritesListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Toggle a favorite
#[derive(Debug, Clone, Args)]
pub struct FavoritesToggleArgs {
    /// Tool slug (see `tools list`)
    #[arg(value_name = "SLUG")]
    pub slug: String,
}

impl FavoritesArgs {
    /// Execute the favorites command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            FavoritesCommand::List(args) => args.execute(),
            FavoritesCommand::Toggle(args) => args.execute(),
        }
    }
}

impl FavoritesListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let slugs = open_favorites(&config)?.list();

        if self.json {
            return print_json(&slugs);
        }

        if slugs.is_empty() {
            println!("No favorites yet");
            return Ok(());
        }

        for slug in slugs {
            // Slugs of tools removed from the catalog are still listed
            let name = find_tool(&slug).map_or("(unknown tool)", |tool| tool.name);
            println!("{slug:<22} {name}");
        }
        Ok(())
    }
}

impl FavoritesToggleArgs {
    /// Execute the toggle command
    pub fn execute(&self) -> CliResult<()> {
        let slug = self.slug.trim().to_lowercase();
        if find_tool(&slug).is_none() {
            return Err(CliError::validation(format!(
                "Unknown tool '{slug}'. Run 'minitools tools list' to see available tools"
            )));
        }

        let config = load_config()?;
        let mut favorites = open_favorites(&config)?;
        let now_favorite = favorites
            .toggle(&slug)
            .map_err(|e| CliError::io(format!("Failed to update favorites: {e:#}")))?;

        if now_favorite {
            println!("Added {slug} to favorites");
        } else {
            println!("Removed {slug} from favorites");
        }
        Ok(())
    }
}
