//! Colors the user saved from the color picker.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RgbColor;

/// Maximum number of saved colors kept.
pub const SAVED_COLORS_CAPACITY: usize = 20;

/// A saved `{id, hex, name}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedColor {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Hex code in "#RRGGBB" form
    pub hex: String,
    /// User-facing label
    pub name: String,
}

impl SavedColor {
    /// Creates a record with a fresh id. An empty name defaults to the hex code.
    pub fn new(color: RgbColor, name: impl Into<String>) -> Self {
        let hex = color.to_hex();
        let name = name.into();
        let name = if name.trim().is_empty() {
            hex.clone()
        } else {
            name.trim().to_string()
        };

        Self {
            id: Uuid::new_v4().to_string(),
            hex,
            name,
        }
    }
}
