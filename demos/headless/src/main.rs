//! `headless` — the campus twin client without a map widget.
//!
//! Connects to a running `ct-server`, draws buildings and vehicles into the
//! log, keeps vehicle markers in sync, and optionally requests a route.
//!
//! Run with:
//!   cargo run -p ct-server            # in one terminal
//!   cargo run -p headless -- --optimize

mod surface;

use std::future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ct_client::{
    CampusClient, DEFAULT_ROUTE_FROM, DEFAULT_ROUTE_TO, DEFAULT_SERVER_URL, HttpFeed, SyncConfig,
    shared,
};

use surface::LogSurface;

#[derive(Parser)]
#[command(name = "headless")]
#[command(about = "Campus digital twin client rendering into the log")]
struct Cli {
    /// Base URL of the campus server
    #[arg(long, env = "CAMPUS_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Vehicle poll interval in milliseconds
    #[arg(long, default_value_t = 3_000)]
    interval_ms: u64,

    /// Consecutive missed polls before a vehicle marker is removed
    #[arg(long, default_value_t = 1)]
    miss_limit: u32,

    /// HTTP request timeout in milliseconds
    #[arg(long, default_value_t = 10_000)]
    timeout_ms: u64,

    /// Request and draw a route after startup
    #[arg(long)]
    optimize: bool,

    /// Route start building id
    #[arg(long, default_value = DEFAULT_ROUTE_FROM)]
    from: String,

    /// Route end building id
    #[arg(long, default_value = DEFAULT_ROUTE_TO)]
    to: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let feed = Arc::new(
        HttpFeed::new(&cli.server, Duration::from_millis(cli.timeout_ms))
            .context("failed to build HTTP client")?,
    );
    let config = SyncConfig {
        interval:   Duration::from_millis(cli.interval_ms),
        miss_limit: cli.miss_limit,
    };
    info!(server = %cli.server, ?config, "connecting");

    // The log is ready as soon as the subscriber is installed.
    let surface = shared(LogSurface::default());
    let mut client = CampusClient::bootstrap(feed, surface, future::ready(()), &config).await;

    if cli.optimize {
        if let Err(e) = client.reload_buildings().await {
            warn!(error = %e, "buildings still unavailable");
        }
        // Failures are already logged and alerted.
        let _ = client.optimize_route(&cli.from, &cli.to).await;
    }

    tokio::signal::ctrl_c().await.context("failed to listen for Ctrl+C")?;
    let summary = client.shutdown().await?;
    info!(
        polls = summary.polls,
        failures = summary.failures,
        vehicles = summary.bindings.len(),
        "stopped"
    );
    Ok(())
}
