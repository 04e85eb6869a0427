//! Registry wrapper that renders the exporter's metrics.

use prometheus::{Encoder, Registry, TextEncoder};
use std::sync::Arc;
use std::time::Duration;

use super::TemperatureCollector;
use crate::error::ExporterError;
use crate::sensor::TemperatureReader;

/// The exporter's private Prometheus registry.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
}

impl Metrics {
    /// Creates a registry holding a single temperature collector.
    pub fn new(namespace: &str, reader: TemperatureReader) -> Result<Self, ExporterError> {
        Self::with_warning_interval(namespace, reader, Duration::ZERO)
    }

    /// Like [`Metrics::new`], rate limiting the sensor failure warning.
    pub fn with_warning_interval(
        namespace: &str,
        reader: TemperatureReader,
        warning_interval: Duration,
    ) -> Result<Self, ExporterError> {
        let collector = TemperatureCollector::new(namespace, reader)
            .map_err(ExporterError::Registry)?
            .with_warning_interval(warning_interval);

        let registry = Registry::new();
        registry
            .register(Box::new(collector))
            .map_err(ExporterError::Registry)?;

        Ok(Metrics {
            registry: Arc::new(registry),
        })
    }

    /// Gathers and renders all metrics in Prometheus text format.
    ///
    /// Blocks on the sensor read.
    pub fn render(&self) -> Result<String, ExporterError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| ExporterError::Encode(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| ExporterError::Encode(e.to_string()))
    }

    /// Content type of [`Metrics::render`] output.
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }
}
