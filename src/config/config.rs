use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::logging::LoggingConfig;
use crate::error::ExporterError;
use crate::sensor::SensorConfig;

/// Prefix of the environment variables that override configuration keys.
pub const ENV_PREFIX: &str = "TEMPERATURE_EXPORTER_";

/// Characters the router treats as route parameters or wildcards.
const ROUTE_SYNTAX: [char; 4] = ['*', ':', '{', '}'];

fn invalid(message: String) -> ExporterError {
    ExporterError::Config(Box::new(figment::Error::from(message)))
}

/// Exporter configuration, built once at startup and never mutated.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// A bare port ("9001") or a full "host:port" address.
    pub listen_address: String,
    pub telemetry_path: String,
    /// Prefix of the exported metric names.
    pub namespace: String,
    pub sensor: SensorConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_address: "9001".to_string(),
            telemetry_path: "/metrics".to_string(),
            namespace: "raspberry".to_string(),
            sensor: SensorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// The socket address to bind, listening on all interfaces for a bare port.
    pub fn bind_address(&self) -> String {
        let address = self.listen_address.trim();
        if address.contains(':') {
            address.to_string()
        } else {
            format!("0.0.0.0:{}", address)
        }
    }

    /// Rejects settings the router cannot serve.
    pub fn validate(&self) -> Result<(), ExporterError> {
        let path = self.metrics_path();
        if path == "/" {
            return Err(invalid(
                "telemetry_path must not be '/', it is taken by the landing page".to_string(),
            ));
        }
        if let Some(c) = path.chars().find(|c| ROUTE_SYNTAX.contains(c) || c.is_whitespace()) {
            return Err(invalid(format!(
                "telemetry_path '{}' contains '{}', which is not allowed in a fixed route",
                path, c
            )));
        }
        Ok(())
    }

    /// The telemetry path, always starting with a slash.
    pub fn metrics_path(&self) -> String {
        let path = self.telemetry_path.trim();
        if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        }
    }
}

/// Values given explicitly on the command line. Unset fields are skipped so
/// they do not shadow the file or environment.
#[derive(Serialize, Debug, Default)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Layers defaults, an optional YAML file, `TEMPERATURE_EXPORTER_*`
/// environment variables and CLI overrides, lowest precedence first.
pub fn build_figment(file: Option<&Path>, overrides: &ConfigOverrides) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(path) = file {
        figment = figment.merge(Yaml::file(path));
    }
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Serialized::defaults(overrides))
}

/// Load the configuration.
pub fn load_config(
    file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<Config, ExporterError> {
    if let Some(path) = file {
        if !path.exists() {
            return Err(invalid(format!(
                "configuration file {} does not exist",
                path.display()
            )));
        }
    }
    let config = build_figment(file, overrides)
        .extract::<Config>()
        .map_err(|e| ExporterError::Config(Box::new(e)))?;
    config.validate()?;
    Ok(config)
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() -> Result<(), serde_json::Error> {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
