//! Colors saved from the color picker.

use anyhow::Result;

use super::Store;
use crate::models::{RgbColor, SavedColor, SAVED_COLORS_CAPACITY};

/// Storage key for the saved colors list.
pub const SAVED_COLORS_KEY: &str = "saved_colors";

/// Newest-first list of saved colors, capped at 20.
#[derive(Debug)]
pub struct SavedColors<S> {
    store: S,
}

impl<S: Store<Vec<SavedColor>>> SavedColors<S> {
    /// Wraps a store holding the saved colors.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved colors, newest first.
    pub fn list(&self) -> Vec<SavedColor> {
        self.store.get()
    }

    /// Saves `color` at the front, dropping the oldest past the cap.
    ///
    /// Saving a color that is already present moves it to the front under
    /// the new name instead of duplicating it.
    pub fn save(&mut self, color: RgbColor, name: &str) -> Result<SavedColor> {
        let saved = SavedColor::new(color, name);

        let mut colors = self.store.get();
        colors.retain(|c| c.hex != saved.hex);
        colors.insert(0, saved.clone());
        colors.truncate(SAVED_COLORS_CAPACITY);

        self.store.set(colors)?;
        Ok(saved)
    }

    /// Removes the color with `id`. Returns false if it was not found.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let mut colors = self.store.get();
        let before = colors.len();
        colors.retain(|c| c.id != id);
        if colors.len() == before {
            return Ok(false);
        }
        self.store.set(colors)?;
        Ok(true)
    }

    /// Removes every saved color.
    pub fn clear(&mut self) -> Result<()> {
        self.store.set(Vec::new())
    }
}
