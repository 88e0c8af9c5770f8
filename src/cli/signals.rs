//! Signal handling for server shutdown

use tokio::sync::watch;
use tracing::{info, warn};

/// Shutdown signal shared by the poller and the HTTP server.
///
/// SIGINT (all platforms) and SIGTERM (unix) flip the channel; tasks
/// observe it through receivers obtained from [`ShutdownSignal::subscribe`].
pub struct ShutdownSignal {
    sender: watch::Sender<bool>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self { sender }
    }

    /// Get a receiver observing the shutdown flag
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }

    /// Request shutdown
    pub fn trigger(&self) {
        let _ = self.sender.send(true);
    }

    /// Spawn a task that triggers shutdown on the first OS signal received
    pub fn listen_for_signals(&self) {
        let sender = self.sender.clone();

        tokio::spawn(async move {
            match wait_for_signal().await {
                Ok(()) => {
                    info!("shutdown signal received");
                    let _ = sender.send(true);
                }
                Err(e) => warn!("unable to listen for shutdown signals: {e}"),
            }
        });
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = sigterm.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
