//! Error types for the exporter.

/// Errors raised while reading the temperature sensor.
///
/// These never reach an HTTP caller: the collector logs them and skips the
/// sample for that scrape.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    /// The sensor file or command could not be read.
    #[error("sensor {sensor} unavailable: {detail}")]
    Unavailable { sensor: String, detail: String },

    /// The sensor returned something that is not a finite number.
    #[error("failed to parse value from sensor {sensor}: expected millidegrees, got '{content}'")]
    Parse { sensor: String, content: String },
}

/// Fatal errors raised while starting or running the exporter.
#[derive(Debug, thiserror::Error)]
pub enum ExporterError {
    #[error("error loading configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("invalid logging.level '{0}'. Valid values: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("failed to register metrics: {0}")]
    Registry(#[source] prometheus::Error),

    #[error("failed to encode metrics: {0}")]
    Encode(String),

    #[error("could not bind to {address}: {source}")]
    Listener {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
