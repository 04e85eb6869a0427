//! Prometheus collector that samples the temperature on every gather.

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{GaugeVec, Opts};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::warn;

use crate::sensor::TemperatureReader;
use crate::utils::log_throttle::should_emit;

pub const GAUGE_NAME: &str = "gauge_metric";
pub const GAUGE_HELP: &str = "Temperature of Raspberry Pi";
pub const LABEL_TYPE: &str = "type";
pub const LABEL_VALUE: &str = "temperature";

const SENSOR_WARNING_KEY: &str = "collector.sensor_read_failed";

/// Exposes the CPU temperature as `{namespace}_gauge_metric{type="temperature"}`.
pub struct TemperatureCollector {
    reader: TemperatureReader,
    gauge: GaugeVec,
    warning_interval: Duration,
    // Held for the whole read-set-collect sequence of a scrape.
    lock: Mutex<()>,
}

impl TemperatureCollector {
    /// Builds the collector and its descriptor.
    ///
    /// Fails if `namespace` does not form a valid metric name.
    pub fn new(namespace: &str, reader: TemperatureReader) -> prometheus::Result<Self> {
        let gauge = GaugeVec::new(
            Opts::new(GAUGE_NAME, GAUGE_HELP).namespace(namespace),
            &[LABEL_TYPE],
        )?;

        Ok(TemperatureCollector {
            reader,
            gauge,
            warning_interval: Duration::ZERO,
            lock: Mutex::new(()),
        })
    }

    /// Rate limits the warning logged when the sensor cannot be read.
    pub fn with_warning_interval(mut self, interval: Duration) -> Self {
        self.warning_interval = interval;
        self
    }
}

impl Collector for TemperatureCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.gauge.desc()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        self.gauge.reset();
        match self.reader.read() {
            Ok(celsius) => {
                self.gauge.with_label_values(&[LABEL_VALUE]).set(celsius);
                self.gauge.collect()
            }
            Err(e) => {
                if let Some(suppressed) = should_emit(SENSOR_WARNING_KEY, self.warning_interval) {
                    warn!(
                        suppressed,
                        sensor = %self.reader.source_name(),
                        "Skipping temperature sample: {}",
                        e
                    );
                }
                Vec::new()
            }
        }
    }
}
