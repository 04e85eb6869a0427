//! HTTP route definitions and handlers.
//!
//! The exporter serves two routes: the landing page at `/` and the metrics
//! exposition at the configured telemetry path.

mod index;
mod metrics;

use crate::state::AppState;
use axum::Router;

/// Creates the application router with all configured routes.
pub fn create_router(state: AppState) -> Router {
    let metrics_path = state.config.metrics_path();
    Router::new()
        .merge(index::routes())
        .merge(metrics::routes(&metrics_path))
        .with_state(state)
}
