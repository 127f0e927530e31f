//! Bounded calculation history, newest entry first

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::buffer::ERROR_TEXT;
use crate::core::format_number;

/// A single completed calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left-hand side, e.g. `7 + 5` or `sqr(3)`
    pub expression: String,
    /// Result, `None` when the calculation failed
    pub result: Option<f64>,
}

impl HistoryEntry {
    /// Creates a successful entry
    #[must_use]
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result: Some(result),
        }
    }

    /// Creates an entry for a failed calculation
    #[must_use]
    pub fn failed(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: None,
        }
    }

    /// Returns the line shown in the history list, e.g. `7 + 5 = 12`
    #[must_use]
    pub fn display(&self) -> String {
        match self.result {
            Some(value) => format!("{} = {}", self.expression, format_number(value)),
            None => format!("{} = {}", self.expression, ERROR_TEXT),
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Calculation history
///
/// Holds at most `max_entries`; recording past the bound evicts the oldest.
#[derive(Debug, Clone)]
pub struct History {
    /// Newest at the front
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
    pub const DEFAULT_MAX_ENTRIES: usize = 10;

    /// Creates a history holding the last ten calculations
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history with a custom bound (at least one entry)
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries + 1),
            max_entries,
        }
    }

    /// Adds an entry as the newest, evicting the oldest beyond the bound
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.max_entries);
    }

    /// Records a successful calculation
    pub fn record(&mut self, expression: &str, result: f64) {
        self.push(HistoryEntry::new(expression, result));
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

    /// Iterates entries newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Returns the entry at `index` (0 = newest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Display lines, newest first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(HistoryEntry::display).collect()
    }

    /// Serializes the entries (newest first) to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Exports history as one line per entry
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.lines().join("\n")
    }
}
