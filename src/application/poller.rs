//! Clipboard polling use case

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::warn;

use super::history_cache::HistoryCache;
use super::ports::Clipboard;

/// Fixed sampling cadence of the poller.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Periodic task feeding clipboard samples into the [`HistoryCache`].
///
/// Each tick reads the clipboard outside any lock and hands the result
/// to the cache, whose dedup rule absorbs unchanged clipboard contents.
/// Read failures are logged and skipped; the loop only stops when the
/// shutdown channel fires.
pub struct Poller<C: Clipboard> {
    clipboard: C,
    cache: HistoryCache,
}

impl<C: Clipboard> Poller<C> {
    /// Create a poller over the given clipboard and cache handle
    pub fn new(clipboard: C, cache: HistoryCache) -> Self {
        Self { clipboard, cache }
    }

    /// Run until `shutdown` observes `true` or its sender is dropped.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = time::interval(POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.tick().await,
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
    }

    /// Sample the clipboard once
    async fn tick(&self) {
        match self.clipboard.read().await {
            Ok(content) => {
                self.cache.insert(content);
            }
            Err(e) => warn!("failed to fetch clipboard content: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::ClipboardError;

    /// Clipboard fake replaying a fixed list of read results
    struct ScriptedClipboard {
        reads: Mutex<VecDeque<Result<String, ClipboardError>>>,
    }

    impl ScriptedClipboard {
        fn new(reads: Vec<Result<String, ClipboardError>>) -> Self {
            Self {
                reads: Mutex::new(reads.into()),
            }
        }
    }

    #[async_trait]
    impl Clipboard for ScriptedClipboard {
        async fn read(&self) -> Result<String, ClipboardError> {
            self.reads
                .lock()
                .expect("lock poisoned")
                .pop_front()
                .unwrap_or_else(|| Ok("idle".to_string()))
        }

        async fn write(&self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn tick_inserts_clipboard_content() {
        let cache = HistoryCache::new();
        let poller = Poller::new(
            ScriptedClipboard::new(vec![
                Ok("a".to_string()),
                Ok("a".to_string()),
                Ok("b".to_string()),
            ]),
            cache.clone(),
        );

        poller.tick().await;
        poller.tick().await;
        poller.tick().await;

        // The second identical read is absorbed by the cache dedup rule.
        assert_eq!(cache.list(), vec!["b", "a"]);
    }

    #[tokio::test]
    async fn read_failure_is_skipped() {
        let cache = HistoryCache::new();
        let poller = Poller::new(
            ScriptedClipboard::new(vec![
                Err(ClipboardError::ReadFailed("no display".to_string())),
                Ok("recovered".to_string()),
            ]),
            cache.clone(),
        );

        poller.tick().await;
        assert!(cache.is_empty());

        poller.tick().await;
        assert_eq!(cache.head().as_deref(), Some("recovered"));
    }

    #[tokio::test(start_paused = true)]
    async fn run_stops_on_shutdown_signal() {
        let cache = HistoryCache::new();
        let poller = Poller::new(
            ScriptedClipboard::new(vec![Ok("tick".to_string())]),
            cache.clone(),
        );

        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(poller.run(rx));

        time::sleep(POLL_INTERVAL * 2).await;
        // First tick consumed the script, later ticks read the fallback.
        assert_eq!(cache.list(), vec!["idle", "tick"]);

        tx.send(true).expect("poller dropped receiver");
        task.await.expect("poller task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn run_stops_when_sender_is_dropped() {
        let cache = HistoryCache::new();
        let poller = Poller::new(ScriptedClipboard::new(vec![]), cache);

        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(poller.run(rx));

        time::sleep(POLL_INTERVAL).await;
        drop(tx);
        task.await.expect("poller task panicked");
    }
}
