//! Bounded history of successful evaluations

use std::collections::VecDeque;

use crate::core::format_result;

/// A single entry in the calculation history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The expression that was evaluated
    pub expression: String,
    /// The result of the calculation
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub const fn new(expression: String, result: f64) -> Self {
        Self { expression, result }
    }

    /// Returns the entry as `expression = result`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, format_result(self.result))
    }
}

/// Calculator history manager
///
/// Bounded queue: once full, the oldest entry is dropped.
#[derive(Debug, Clone)]
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
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Adds a calculation result to the history
    pub fn record(&mut self, expression: &str, result: f64) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries
            .push_back(HistoryEntry::new(expression.to_string(), result));
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

    /// Returns an iterator over the entries (newest first)
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }
}
