//! History records for tools that keep a running log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single `{input, output, timestamp}` history record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// What the user entered (e.g. "12+3*2")
    pub input: String,
    /// What the tool produced (e.g. "30")
    pub output: String,
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    pub fn now(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Tools that persist a history, each with its own cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    /// Calculator results, capped at 50
    Calculator,
    /// Chat exchanges, capped at 10
    Chat,
}

impl HistoryKind {
    /// Maximum number of entries kept.
    #[must_use]
    pub const fn capacity(self) -> usize {
        match self {
            Self::Calculator => 50,
            Self::Chat => 10,
        }
    }

    /// Storage key, also the file stem of the persisted list.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Calculator => "calculator_history",
            Self::Chat => "chat_history",
        }
    }
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calculator => f.write_str("calculator"),
            Self::Chat => f.write_str("chat"),
        }
    }
}

impl FromStr for HistoryKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "calculator" | "calc" => Ok(Self::Calculator),
            "chat" => Ok(Self::Chat),
            _ => anyhow::bail!("Unknown history '{s}'. Expected 'calculator' or 'chat'"),
        }
    }
}
