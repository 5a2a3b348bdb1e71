//! CLI command handlers for Minitools.
//!
//! Each tool from the catalog that has a headless form is exposed as a
//! subcommand, so conversions and lookups can be scripted and tested.

pub mod age;
pub mod base;
pub mod calc;
pub mod color;
pub mod common;
pub mod config;
pub mod convert;
pub mod currency;
pub mod favorites;
pub mod hash;
pub mod history;
pub mod password;
pub mod tools;
pub mod units;

// Re-export types used by main.rs and tests
pub use age::AgeArgs;
pub use base::BaseArgs;
pub use calc::CalcArgs;
pub use color::ColorArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use currency::CurrencyArgs;
pub use favorites::FavoritesArgs;
pub use hash::HashArgs;
pub use history::HistoryArgs;
pub use password::PasswordArgs;
pub use tools::ToolsArgs;
pub use units::UnitsArgs;
