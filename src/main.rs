//! Minitools - everyday conversion and utility tools from the command line
//!
//! Converts units, inspects colors, calculates ages, and keeps favorites,
//! history and saved colors between runs.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use minitools::cli::{
    AgeArgs, BaseArgs, CalcArgs, CliResult, ColorArgs, ConfigArgs, ConvertArgs, CurrencyArgs,
    FavoritesArgs, HashArgs, HistoryArgs, PasswordArgs, ToolsArgs, UnitsArgs,
};

/// Minitools - everyday conversion and utility tools
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a value between units
    Convert(ConvertArgs),
    /// List supported units
    Units(UnitsArgs),
    /// Inspect colors, generate schemes and manage saved colors
    Color(ColorArgs),
    /// Calculate an exact age
    Age(AgeArgs),
    /// Evaluate a calculator key sequence
    Calc(CalcArgs),
    /// Show or clear tool history
    History(HistoryArgs),
    /// Convert an integer between number bases
    Base(BaseArgs),
    /// Hash text with SHA-2
    Hash(HashArgs),
    /// Generate random passwords
    Password(PasswordArgs),
    /// Convert between currencies
    Currency(CurrencyArgs),
    /// Browse the tool catalog
    Tools(ToolsArgs),
    /// Manage favorite tools
    Favorites(FavoritesArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Convert(args) => args.execute(),
            Self::Units(args) => args.execute(),
            Self::Color(args) => args.execute(),
            Self::Age(args) => args.execute(),
            Self::Calc(args) => args.execute(),
            Self::History(args) => args.execute(),
            Self::Base(args) => args.execute(),
            Self::Hash(args) => args.execute(),
            Self::Password(args) => args.execute(),
            Self::Currency(args) => args.execute(),
            Self::Tools(args) => args.execute(),
            Self::Favorites(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
