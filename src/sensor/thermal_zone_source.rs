//! Reads the CPU temperature straight from a sysfs thermal zone.
//!
//! On the Raspberry Pi, thermal zone 0 reports the SoC temperature in
//! millidegrees Celsius.

use super::SensorSource;
use crate::error::SensorError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Default sysfs path for the CPU thermal zone.
pub const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

fn default_path() -> String {
    THERMAL_ZONE_PATH.to_string()
}

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct ThermalZoneSourceConfig {
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for ThermalZoneSourceConfig {
    fn default() -> Self {
        ThermalZoneSourceConfig {
            path: default_path(),
        }
    }
}

pub struct ThermalZoneSource {
    path: PathBuf,
}

impl ThermalZoneSource {
    pub fn new(config: &ThermalZoneSourceConfig) -> Self {
        ThermalZoneSource {
            path: PathBuf::from(&config.path),
        }
    }
}

impl SensorSource for ThermalZoneSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_raw(&self) -> Result<String, SensorError> {
        debug!("Reading thermal zone {}", self.path.display());
        std::fs::read_to_string(&self.path).map_err(|e| SensorError::Unavailable {
            sensor: self.describe(),
            detail: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file should be created");
        write!(file, "{content}").expect("temp file should be writable");
        file
    }

    fn source_for(path: &std::path::Path) -> ThermalZoneSource {
        ThermalZoneSource::new(&ThermalZoneSourceConfig {
            path: path.display().to_string(),
        })
    }

    #[test]
    fn reads_file_content_verbatim() {
        let file = write_temp("54321\n");
        let raw = source_for(file.path()).read_raw().unwrap();
        assert_eq!(raw, "54321\n");
    }

    #[test]
    fn deleted_file_is_unavailable() {
        let file = write_temp("54321\n");
        let source = source_for(file.path());
        file.close().expect("temp file should be removed");
        assert!(matches!(
            source.read_raw(),
            Err(SensorError::Unavailable { .. })
        ));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let source = source_for(std::path::Path::new("/nonexistent/thermal/temp"));
        let result = source.read_raw();
        assert!(matches!(result, Err(SensorError::Unavailable { .. })));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("/nonexistent/thermal/temp"));
    }
}
