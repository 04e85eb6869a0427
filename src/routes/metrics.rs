//! Metrics exposition endpoint.

use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::debug;

/// Creates the metrics route under `path`.
pub fn routes(path: &str) -> Router<AppState> {
    Router::new().route(path, get(metrics_handler))
}

/// Returns the temperature in Prometheus text format.
///
/// Sensor failures still answer 200 with an empty body; only an encoding
/// failure is reported as an error.
async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, HTTPError> {
    let metrics = state.metrics.clone();
    let metrics_text =
        tokio::task::spawn_blocking(move || metrics.render().map_err(HTTPError::from))
            .await
            .map_err(|e| HTTPError::internal(format!("metrics collection aborted: {}", e)))??;
    debug!("Served {} bytes of metrics", metrics_text.len());

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, state.metrics.content_type())],
        metrics_text,
    ))
}
