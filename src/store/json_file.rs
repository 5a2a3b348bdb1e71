//! JSON-file-backed store.
//!
//! Each store owns one file. A missing file reads as the default value and a
//! corrupt file is logged and treated the same way, so a bad write from an
//! older version never locks the user out of a tool.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{Listener, Store, SubscriptionId, Subscribers};

/// Persists a value as pretty-printed JSON.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    value: T,
    subscribers: Subscribers<T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    /// Opens the store at `path`, loading the current value.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let value = Self::read(&path)?;
        Ok(Self {
            path,
            value,
            subscribers: Subscribers::default(),
        })
    }

    /// Opens `<dir>/<key>.json`.
    pub fn open_in(dir: &Path, key: &str) -> Result<Self> {
        Self::open(dir.join(format!("{key}.json")))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> Result<T> {
        if !path.exists() {
            debug!("Store file {} not found, using default", path.display());
            return Ok(T::default());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read store file: {}", path.display()))?;

        match serde_json::from_str(&content) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(
                    "Ignoring unreadable store file {}: {e}",
                    path.display()
                );
                Ok(T::default())
            }
        }
    }

    /// Writes via temp file + rename so the file is never half-written.
    fn write(&self, value: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create data directory: {}",
                parent.display()
            ))?;
        }

        let content =
            serde_json::to_string_pretty(value).context("Failed to serialize store value")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp store file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp store file to: {}",
            self.path.display()
        ))?;

        debug!("Saved store file {}", self.path.display());
        Ok(())
    }
}

impl<T> Store<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    fn get(&self) -> T {
        self.value.clone()
    }

    fn set(&mut self, value: T) -> Result<()> {
        self.write(&value)?;
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
