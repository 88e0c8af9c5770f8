//! Clipserve CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clipserve::cli::{app::run_server, args::Cli, init_tracing};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    run_server(cli).await
}
