//! Temperature sensor sources and the reader that normalizes their output.

pub mod base;
pub mod command_source;
pub mod reader;
pub mod static_source;
pub mod thermal_zone_source;

pub use base::{create_sensor_source, SensorConfig, SensorSource};
pub use reader::{normalize, TemperatureReader};
