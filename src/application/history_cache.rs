//! Shared handle around the clipboard history

use std::sync::{Arc, RwLock};

use crate::domain::History;

/// Cloneable handle mediating all access to the [`History`].
///
/// Readers (`head`, `list`) take a shared lock; `insert` takes an
/// exclusive lock, so readers never observe a partially applied
/// prepend-and-truncate. Locks only guard the in-memory operation and
/// are never held across clipboard I/O.
#[derive(Clone, Default)]
pub struct HistoryCache {
    inner: Arc<RwLock<History>>,
}

impl HistoryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a snapshot; a value equal to the current head is dropped.
    ///
    /// Returns whether the history was mutated.
    pub fn insert(&self, text: String) -> bool {
        let mut history = self.inner.write().unwrap_or_else(|e| e.into_inner());
        history.insert(text)
    }

    /// The most recent snapshot, or `None` while the history is empty
    pub fn head(&self) -> Option<String> {
        let history = self.inner.read().unwrap_or_else(|e| e.into_inner());
        history.head().map(str::to_owned)
    }

    /// Copied snapshot of the whole history, most-recent-first
    pub fn list(&self) -> Vec<String> {
        let history = self.inner.read().unwrap_or_else(|e| e.into_inner());
        history.to_vec()
    }

    /// Number of snapshots currently held
    pub fn len(&self) -> usize {
        let history = self.inner.read().unwrap_or_else(|e| e.into_inner());
        history.len()
    }

    /// Whether the history holds no snapshots
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::domain::HISTORY_CAPACITY;

    #[test]
    fn clones_share_state() {
        let cache = HistoryCache::new();
        let other = cache.clone();

        assert!(cache.insert("shared".to_string()));
        assert_eq!(other.head().as_deref(), Some("shared"));
        assert_eq!(other.list(), vec!["shared"]);
    }

    #[test]
    fn head_on_empty_cache_is_none() {
        let cache = HistoryCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.head(), None);
        assert!(cache.list().is_empty());
    }

    #[test]
    fn duplicate_head_does_not_grow_cache() {
        let cache = HistoryCache::new();
        assert!(cache.insert("x".to_string()));
        assert!(!cache.insert("x".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn concurrent_inserts_and_reads_stay_consistent() {
        let cache = HistoryCache::new();

        let writers: Vec<_> = (0..4)
            .map(|w| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        cache.insert(format!("writer-{w}-{i}"));
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for _ in 0..200 {
                        let list = cache.list();
                        assert!(list.len() <= HISTORY_CAPACITY);
                        // Every handed-out entry is a complete snapshot.
                        for entry in &list {
                            assert!(entry.starts_with("writer-"));
                        }
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().expect("thread panicked");
        }

        assert_eq!(cache.len(), HISTORY_CAPACITY);
    }
}
