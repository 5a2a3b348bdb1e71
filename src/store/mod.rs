//! Persisted tool state behind an injectable store interface.
//!
//! Tools never touch the filesystem directly. They receive a [`Store`] and
//! read, write, and observe a single value through it. [`MemoryStore`] backs
//! tests; [`JsonFileStore`] backs the CLI.

pub mod favorites;
pub mod history;
pub mod json_file;
pub mod memory;
pub mod saved_colors;

use anyhow::Result;

pub use favorites::{Favorites, FAVORITES_KEY};
pub use history::History;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use saved_colors::{SavedColors, SAVED_COLORS_KEY};

/// Handle returned by [`Store::subscribe`].
pub type SubscriptionId = u64;

/// Callback invoked with the new value after every successful write.
pub type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A single observable value.
pub trait Store<T> {
    /// Returns a copy of the current value.
    fn get(&self) -> T;

    /// Replaces the value and notifies subscribers.
    fn set(&mut self, value: T) -> Result<()>;

    /// Registers a listener called after each successful [`Store::set`].
    fn subscribe(&mut self, listener: Listener<T>) -> SubscriptionId;

    /// Removes a listener. Returns false if the id was unknown.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// Listener bookkeeping shared by the store implementations.
pub(crate) struct Subscribers<T> {
    next_id: SubscriptionId,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            listeners: Vec::new(),
        }
    }
}

impl<T> Subscribers<T> {
    pub(crate) fn add(&mut self, listener: Listener<T>) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn notify(&self, value: &T) {
        for (_, listener) in &self.listeners {
            listener(value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl<T> std::fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.listeners.len())
            .finish()
    }
}
