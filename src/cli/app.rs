//! Server app runner

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::application::{HistoryCache, Poller};
use crate::infrastructure::clipboard::create_clipboard;
use crate::infrastructure::web;

use super::args::Cli;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Initialize tracing; RUST_LOG overrides the `info` default
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Run the HTTP server and the clipboard poller until shutdown
pub async fn run_server(cli: Cli) -> ExitCode {
    let cache = HistoryCache::new();
    let clipboard = create_clipboard();

    let shutdown = ShutdownSignal::new();
    shutdown.listen_for_signals();

    // The poller is the only writer into the cache; /api/set goes
    // straight to the clipboard and surfaces here on the next tick.
    let poller = Poller::new(clipboard.clone(), cache.clone());
    let poller_task = tokio::spawn(poller.run(shutdown.subscribe()));

    let routes = web::api(cache, clipboard);
    let mut server_shutdown = shutdown.subscribe();

    let bound = warp::serve(routes).try_bind_with_graceful_shutdown(cli.listen, async move {
        let _ = server_shutdown.changed().await;
    });

    let (addr, server) = match bound {
        Ok(bound) => bound,
        Err(e) => {
            error!("unable to bind {}: {e}", cli.listen);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    info!("listening on http://{addr}");
    server.await;

    // Stop the poller even when the server ended on its own.
    shutdown.trigger();
    let _ = poller_task.await;

    ExitCode::from(EXIT_SUCCESS)
}
