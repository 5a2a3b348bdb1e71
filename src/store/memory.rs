//! In-memory store for tests and ephemeral state.

use anyhow::Result;

use super::{Listener, Store, SubscriptionId, Subscribers};

/// Keeps the value in memory only.
#[derive(Debug)]
pub struct MemoryStore<T> {
    value: T,
    subscribers: Subscribers<T>,
}

impl<T> MemoryStore<T> {
    /// Creates a store holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Subscribers::default(),
        }
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Default> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> Store<T> for MemoryStore<T> {
    fn get(&self) -> T {
        self.value.clone()
    }

    fn set(&mut self, value: T) -> Result<()> {
        self.value = value;
        self.subscribers.notify(&self.value);
        Ok(())
    }

    fn subscribe(&mut self, listener: Listener<T>) -> SubscriptionId {
        self.subscribers.add(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }
}
