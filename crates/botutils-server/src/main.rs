//! `botutils` binary: parses the command line and serves the API.

use std::sync::Arc;

use anyhow::Result;
use botutils_server::{logging, ServerConfig};
use clap::Parser;
use relative_time::SystemClock;

/// BotUtils API server - relative time between a civil date and now
#[derive(Parser, Debug)]
#[command(name = "botutils")]
#[command(about = "BotUtils API server - relative time between a civil date and now")]
#[command(version)]
struct Cli {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port for the HTTP server
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Do not serve the rendered docs page or the root redirect
    #[arg(long)]
    no_docs: bool,

    /// Print the resolved configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::new(&cli.host, cli.port, !cli.no_docs);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init_logging(cli.verbose);
    tracing::info!(bind_addr = %config.bind_addr, "starting botutils");

    botutils_server::serve(config, Arc::new(SystemClock), shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
