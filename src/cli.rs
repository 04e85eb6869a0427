//! Command-line flags.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Prometheus exporter for the Raspberry Pi CPU temperature.
#[derive(Parser, Debug, Default)]
#[command(name = "temperature-exporter", version, about)]
pub struct Cli {
    /// The address to listen on for HTTP requests (a port or host:port) [default: 9001].
    #[arg(long = "listen-address")]
    pub listen_address: Option<String>,

    /// A path under which to expose metrics [default: /metrics].
    #[arg(long = "web.telemetry-path")]
    pub telemetry_path: Option<String>,

    /// Prometheus metrics namespace, as the prefix of metrics name [default: raspberry].
    #[arg(long = "metrics.namespace")]
    pub namespace: Option<String>,

    /// Path to a YAML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the JSON schema of the configuration file and exit.
    #[arg(long)]
    pub print_schema: bool,
}

impl Cli {
    /// Flags that were given explicitly, to be layered over the configuration.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            listen_address: self.listen_address.clone(),
            telemetry_path: self.telemetry_path.clone(),
            namespace: self.namespace.clone(),
        }
    }
}
