//! Record of completed computations
//!
//! Every equals press that produces a result appends one entry. The queue is
//! bounded so a long session does not grow without limit.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::Operator;

/// A single completed computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left operand as it was stored
    pub left: String,
    /// Operator applied
    pub operator: Operator,
    /// Right operand as it was typed
    pub right: String,
    /// Unformatted result
    pub result: f64,
    /// Result as shown on the display
    pub display: String,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(
        left: impl Into<String>,
        operator: Operator,
        right: impl Into<String>,
        result: f64,
        display: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            operator,
            right: right.into(),
            result,
            display: display.into(),
        }
    }

    /// Returns the expression part, e.g. `12 + 3`
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.left, self.operator, self.right)
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.display
        )
    }
}

/// Bounded calculation history, oldest entry first
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a new history with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history with custom maximum size
    ///
    /// A capacity of zero disables recording.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    /// Adds an entry, evicting the oldest one when full
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears all history entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns an iterator over the entries (newest first)
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Serializes the history to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Deserializes history from JSON into a history holding at most
    /// `max_entries`; older entries beyond that are dropped
    pub fn from_json(json: &str, max_entries: usize) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::with_capacity(max_entries);
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }

    /// Exports history one computation per line
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
