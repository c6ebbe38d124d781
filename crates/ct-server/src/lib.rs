//! HTTP facade for the campus digital twin.
//!
//! # Endpoints
//!
//! | Method | Path                    | Success                                   |
//! |--------|-------------------------|-------------------------------------------|
//! | GET    | `/api/health`           | `200 {"status":"ok"}`                     |
//! | GET    | `/api/buildings`        | `200 [Building, …]`                       |
//! | GET    | `/api/vehicles`         | `200 {id: Vehicle, …}`                    |
//! | POST   | `/api/routes/optimize`  | `200 {"geometry":{"coordinates":[…]}}`    |
//!
//! Route failures map to `400` (validation), `404` (no route) and `500`
//! (provider), each with an `{"error": …}` body.
//!
//! # Lifecycle
//!
//! [`start_server`] builds the entity store, spawns the vehicle simulator
//! against it, and serves until Ctrl+C / SIGTERM.  The simulator is stopped
//! after the listener drains.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use ct_routing::{MapmyIndiaProvider, RouteProxy, RoutingProvider};
use ct_sim::{SimBuilder, TracingObserver};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

use config::Config;
use routes::{
    buildings_handler, fallback_handler, health_handler, optimize_handler, vehicles_handler,
};
use state::{AppState, build_store};

/// Assemble the router over any routing provider.
pub fn build_router<P: RoutingProvider>(state: Arc<AppState<P>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/buildings", get(buildings_handler::<P>))
        .route("/api/vehicles", get(vehicles_handler::<P>))
        .route("/api/routes/optimize", post(optimize_handler::<P>))
        .fallback(fallback_handler)
        .layer(cors)
        .with_state(state)
}

pub async fn start_server(config: Config) -> anyhow::Result<()> {
    info!(?config, "Initializing state...");
    let store = Arc::new(build_store(&config).context("failed to build entity store")?);

    let provider = MapmyIndiaProvider::new(
        config.api_key.clone(),
        config.routing_base_url.clone(),
        config.routing_timeout,
    )
    .context("failed to build routing client")?;
    let state = AppState::new(Arc::clone(&store), RouteProxy::new(provider));

    let simulator = SimBuilder::new(Arc::clone(&store))
        .config(config.sim.clone())
        .build()
        .context("invalid simulator configuration")?
        .spawn(TracingObserver);
    info!(
        vehicles = store.vehicle_count(),
        interval_ms = config.sim.tick_interval.as_millis() as u64,
        "vehicle simulator started"
    );

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("Server running on http://{address}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    let ticks = simulator.stop().await?;
    info!(%ticks, "Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
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
}
