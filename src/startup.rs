//! Application startup and server initialization.
//!
//! Builds the sensor reader and metrics registry from the configuration, then
//! binds the listener and serves until a shutdown signal arrives.

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::error::ExporterError;
use crate::metrics::Metrics;
use crate::routes;
use crate::sensor::{create_sensor_source, TemperatureReader};
use crate::state::AppState;

/// Builds the shared state: sensor source, reader and registry.
///
/// # Errors
///
/// Returns an error if the telemetry path cannot be routed or the namespace
/// does not produce a valid metric name.
pub fn build_state(config: Arc<Config>) -> Result<AppState, ExporterError> {
    config.validate()?;
    let source = create_sensor_source(&config.sensor);
    info!("Reading temperature from {}", source.describe());

    let metrics = Metrics::with_warning_interval(
        &config.namespace,
        TemperatureReader::new(source),
        Duration::from_secs(config.logging.sensor_warning_interval_secs),
    )?;

    Ok(AppState { config, metrics })
}

/// Initializes and runs the exporter.
///
/// # Errors
///
/// Returns an error if the state cannot be built, the listener fails to bind,
/// or the server stops with an IO error.
pub async fn run(config: Arc<Config>) -> Result<(), ExporterError> {
    let state = build_state(config.clone())?;
    let app = routes::create_router(state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ExporterError::Listener {
            address: address.clone(),
            source,
        })?;

    info!(
        "Start to listen on {}, metrics at {}",
        address,
        config.metrics_path()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ExporterError::Serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
    info!("Shutdown signal received");
}
