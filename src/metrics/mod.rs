//! Metrics collection and exposition for Prometheus.
//!
//! The temperature is read lazily: nothing is sampled until a scrape gathers
//! the registry.

mod collector;
mod registry;

pub use collector::{TemperatureCollector, GAUGE_HELP, GAUGE_NAME, LABEL_TYPE, LABEL_VALUE};
pub use registry::Metrics;
