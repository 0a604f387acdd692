//! Prophet Arena gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ──▶ axum router ──▶ handler ──┬──▶ static JSON (/, leaderboard, predictions)
//!                 (CORS, trace,            │
//!                  request id)             └──▶ KalshiClient ──▶ Kalshi API
//!                                                 (bearer token, one GET)
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use prophet_gateway::config::load_config;
use prophet_gateway::lifecycle::{wait_for_signal, Shutdown};
use prophet_gateway::observability::{logging, metrics};
use prophet_gateway::GatewayServer;

#[derive(Parser)]
#[command(name = "prophet-gateway")]
#[command(about = "HTTP gateway for Prophet Arena", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.bind.as_deref())?;

    logging::init_tracing(&config.observability);
    tracing::info!("prophet-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = ?config.upstream,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = GatewayServer::new(config)?;
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        result = &mut server_task => result??,
        _ = wait_for_signal() => {
            shutdown.trigger();
            server_task.await??;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
