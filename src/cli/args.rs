//! CLI argument definitions using Clap

use std::net::SocketAddr;

use clap::Parser;

/// Clipserve - share the local clipboard over HTTP
#[derive(Parser, Debug)]
#[command(name = "clipserve")]
#[command(version)]
#[command(about = "Serve the local clipboard history over a minimal HTTP API")]
#[command(long_about = None)]
pub struct Cli {
    /// IP/port to listen on
    #[arg(
        short = 'l',
        long,
        value_name = "ADDR",
        env = "CLIPSERVE_LISTEN",
        default_value = "0.0.0.0:3000"
    )]
    pub listen: SocketAddr,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["clipserve"]);
        assert_eq!(cli.listen.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn cli_parses_listen_address() {
        let cli = Cli::parse_from(["clipserve", "--listen", "127.0.0.1:8080"]);
        assert_eq!(cli.listen.to_string(), "127.0.0.1:8080");

        let cli = Cli::parse_from(["clipserve", "-l", "0.0.0.0:9000"]);
        assert_eq!(cli.listen.to_string(), "0.0.0.0:9000");
    }

    #[test]
    fn cli_rejects_malformed_listen_address() {
        let result = Cli::try_parse_from(["clipserve", "--listen", "not-an-address"]);
        assert!(result.is_err());
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
