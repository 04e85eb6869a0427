//! Turns the raw sensor text into degrees Celsius.

use super::SensorSource;
use crate::error::SensorError;

/// Reads a [`SensorSource`] and normalizes the value to degrees Celsius.
pub struct TemperatureReader {
    source: Box<dyn SensorSource>,
}

impl TemperatureReader {
    pub fn new(source: Box<dyn SensorSource>) -> Self {
        TemperatureReader { source }
    }

    pub fn source_name(&self) -> String {
        self.source.describe()
    }

    /// Reads the current temperature in degrees Celsius with two decimals.
    ///
    /// A single attempt is made; failures are returned as-is.
    pub fn read(&self) -> Result<f64, SensorError> {
        let raw = self.source.read_raw()?;
        let content = raw.trim();
        let millidegrees = content
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| SensorError::Parse {
                sensor: self.source.describe(),
                content: content.to_string(),
            })?;
        Ok(normalize(millidegrees))
    }
}

/// Rounds millidegrees half-up to a tenth of a degree and rescales to
/// degrees with two decimals: `trunc(raw / 10 + 0.5) / 100`.
pub fn normalize(millidegrees: f64) -> f64 {
    (millidegrees / 10.0 + 0.5).trunc() / 100.0
}
