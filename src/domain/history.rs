//! Bounded, deduplicating clipboard history

use std::collections::VecDeque;

/// Maximum number of snapshots retained; the oldest entry is dropped first.
pub const HISTORY_CAPACITY: usize = 100;

/// Ordered sequence of clipboard snapshots, most-recent-first.
///
/// Inserting a value equal to the current head is a silent no-op, so the
/// sequence never holds two equal adjacent entries. Non-adjacent repeats
/// are kept as distinct snapshots.
#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a snapshot, dropping the oldest entry beyond capacity.
    ///
    /// Returns `false` without mutating when `text` equals the current head.
    pub fn insert(&mut self, text: String) -> bool {
        if self.entries.front().is_some_and(|head| *head == text) {
            return false;
        }

        self.entries.push_front(text);
        self.entries.truncate(HISTORY_CAPACITY);
        true
    }

    /// The most recent snapshot, if any
    pub fn head(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Copy of all snapshots, most-recent-first
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Number of snapshots currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no snapshots
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
