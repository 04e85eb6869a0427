use super::{
    command_source::{CommandSource, CommandSourceConfig},
    static_source::{StaticSource, StaticSourceConfig},
    thermal_zone_source::{ThermalZoneSource, ThermalZoneSourceConfig},
};
use crate::error::SensorError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration for the sensor the exporter reads from.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum SensorConfig {
    #[serde(rename = "thermal_zone")]
    ThermalZone(ThermalZoneSourceConfig),
    #[serde(rename = "command")]
    Command(CommandSourceConfig),
    #[serde(rename = "static")]
    Static(StaticSourceConfig),
}

impl Default for SensorConfig {
    fn default() -> Self {
        SensorConfig::ThermalZone(ThermalZoneSourceConfig::default())
    }
}

/// A host-exposed sensor that yields the raw temperature text on demand.
///
/// Reads are synchronous and may block (file IO or a child process).
pub trait SensorSource: Send + Sync {
    /// Human readable location of the sensor, used in logs and errors.
    fn describe(&self) -> String;
    fn read_raw(&self) -> Result<String, SensorError>;
}

/// Create a sensor source from a given config.
pub fn create_sensor_source(config: &SensorConfig) -> Box<dyn SensorSource> {
    match config {
        SensorConfig::ThermalZone(cfg) => Box::new(ThermalZoneSource::new(cfg)),
        SensorConfig::Command(cfg) => Box::new(CommandSource::new(cfg)),
        SensorConfig::Static(cfg) => Box::new(StaticSource::new(cfg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::{
        providers::{Format, Yaml},
        Figment,
    };

    fn parse(yaml: &str) -> SensorConfig {
        Figment::new()
            .merge(Yaml::string(yaml))
            .extract()
            .expect("sensor config should parse")
    }

    #[test]
    fn default_is_thermal_zone_zero() {
        match SensorConfig::default() {
            SensorConfig::ThermalZone(cfg) => {
                assert_eq!(cfg.path, "/sys/class/thermal/thermal_zone0/temp");
            }
            other => panic!("unexpected default: {:?}", other),
        }
    }

    #[test]
    fn parses_tagged_variants() {
        let cfg = parse("type: command\nprogram: /bin/cat\nargs: [\"/tmp/temp\"]\n");
        assert_eq!(
            cfg,
            SensorConfig::Command(CommandSourceConfig {
                program: "/bin/cat".to_string(),
                args: vec!["/tmp/temp".to_string()],
            })
        );

        let cfg = parse("type: static\nvalue: \"45678\"\n");
        let source = create_sensor_source(&cfg);
        assert_eq!(source.read_raw().unwrap(), "45678");
        assert_eq!(source.describe(), "static");
    }

    #[test]
    fn thermal_zone_path_defaults_when_omitted() {
        let cfg = parse("type: thermal_zone\n");
        assert_eq!(cfg, SensorConfig::default());
    }
}
