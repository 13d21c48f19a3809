//! # smartroomd — smartroom daemon
//!
//! Composition root that wires the status store, sensor collaborators, and
//! HTTP server together.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the in-memory status store
//! - Hand the sensor side of the store to the virtual feed (when enabled)
//! - Build the axum router, injecting the read/toggle side of the store
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use smartroom_adapter_http_axum::router;
use smartroom_adapter_http_axum::state::AppState;
use smartroom_adapter_virtual::VirtualSensors;
use smartroom_app::store::InMemoryStatusStore;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Store
    let store = Arc::new(InMemoryStatusStore::new(config.initial_status()));

    // Sensor collaborators
    if config.integrations.virtual_sensors {
        let feed = VirtualSensors::new(
            Arc::clone(&store),
            Duration::from_secs(config.integrations.sensor_period_secs),
        );
        tokio::spawn(feed.run());
        tracing::info!(
            period_secs = config.integrations.sensor_period_secs,
            "virtual sensor feed enabled"
        );
    }

    // HTTP
    let app = router::build(AppState::from_arc(store));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "smartroomd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
