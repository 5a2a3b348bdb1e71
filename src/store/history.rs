//! Capped per-tool history.

use anyhow::Result;
use tracing::debug;

use super::Store;
use crate::models::{HistoryEntry, HistoryKind};

/// Append-only history that drops its oldest entries past the tool's cap.
#[derive(Debug)]
pub struct History<S> {
    store: S,
    kind: HistoryKind,
}

impl<S: Store<Vec<HistoryEntry>>> History<S> {
    /// Wraps a store holding the entries for `kind`.
    pub const fn new(store: S, kind: HistoryKind) -> Self {
        Self { store, kind }
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.store.get()
    }

    /// Appends an entry, trimming to the cap.
    pub fn record(&mut self, entry: HistoryEntry) -> Result<()> {
        let mut entries = self.store.get();
        entries.push(entry);

        let capacity = self.kind.capacity();
        if entries.len() > capacity {
            let excess = entries.len() - capacity;
            entries.drain(..excess);
            debug!("Trimmed {excess} old {} history entries", self.kind);
        }

        self.store.set(entries)
    }

    /// Removes every entry.
    pub fn clear(&mut self) -> Result<()> {
        self.store.set(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_record_appends_in_order() {
        let mut history = History::new(MemoryStore::default(), HistoryKind::Calculator);
        history.record(HistoryEntry::now("1+1", "2")).unwrap();
        history.record(HistoryEntry::now("2*3", "6")).unwrap();

        let inputs: Vec<String> = history.entries().into_iter().map(|e| e.input).collect();
        assert_eq!(inputs, vec!["1+1", "2*3"]);
    }

    #[test]
    fn test_calculator_cap_drops_oldest() {
        let mut history = History::new(MemoryStore::default(), HistoryKind::Calculator);
        for i in 0..55 {
            history
                .record(HistoryEntry::now(i.to_string(), i.to_string()))
                .unwrap();
        }

        let entries = history.entries();
        assert_eq!(entries.len(), 50);
        assert_eq!(entries.first().unwrap().input, "5");
        assert_eq!(entries.last().unwrap().input, "54");
    }

    #[test]
    fn test_chat_cap_is_ten() {
        let mut history = History::new(MemoryStore::default(), HistoryKind::Chat);
        for i in 0..12 {
            history
                .record(HistoryEntry::now(format!("q{i}"), format!("a{i}")))
                .unwrap();
        }
        assert_eq!(history.entries().len(), 10);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new(MemoryStore::default(), HistoryKind::Chat);
        history.record(HistoryEntry::now("hi", "hello")).unwrap();
        history.clear().unwrap();
        assert!(history.entries().is_empty());
    }
}
