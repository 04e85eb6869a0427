//! Shared application state.

use crate::config::Config;
use crate::metrics::Metrics;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<Config>,
    /// Registry holding the temperature collector.
    pub metrics: Metrics,
}
