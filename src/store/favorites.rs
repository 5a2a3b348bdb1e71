//! Favorite tools.

use anyhow::Result;
use tracing::debug;

use super::Store;
use crate::models::find_tool;

/// Storage key for the favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered set of favorite tool slugs.
#[derive(Debug)]
pub struct Favorites<S> {
    store: S,
}

impl<S: Store<Vec<String>>> Favorites<S> {
    /// Wraps a store holding the slug list.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Favorite slugs in the order they were added.
    pub fn list(&self) -> Vec<String> {
        self.store.get()
    }

    /// True if `slug` is a favorite.
    pub fn contains(&self, slug: &str) -> bool {
        self.store.get().iter().any(|s| s == slug)
    }

    /// Adds `slug` if absent, removes it if present.
    ///
    /// Returns true if the tool is a favorite afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if `slug` is not a known tool or the write fails.
    pub fn toggle(&mut self, slug: &str) -> Result<bool> {
        if find_tool(slug).is_none() {
            anyhow::bail!(
                "Unknown tool '{slug}'. Run 'minitools tools list' to see available tools"
            );
        }

        let mut slugs = self.store.get();
        let now_favorite = if let Some(pos) = slugs.iter().position(|s| s == slug) {
            slugs.remove(pos);
            false
        } else {
            slugs.push(slug.to_string());
            true
        };

        self.store.set(slugs)?;
        debug!("Toggled favorite {slug}: {now_favorite}");
        Ok(now_favorite)
    }

    /// Access to the underlying store, e.g. to subscribe.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
