//! Data models for conversions, colors, and persisted tool state.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of the CLI and of storage.

pub mod history;
pub mod hsl;
pub mod rgb;
pub mod saved_color;
pub mod tool;
pub mod unit;

// Re-export all model types
pub use history::{HistoryEntry, HistoryKind};
pub use hsl::HslColor;
pub use rgb::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, RgbColor};
pub use saved_color::{SavedColor, SAVED_COLORS_CAPACITY};
pub use tool::{find_tool, ToolInfo, TOOLS};
pub use unit::UnitCategory;
