//! A sensor that always returns the same raw value.
//!
//! Handy on hosts without a thermal zone and as a test double.

use super::SensorSource;
use crate::error::SensorError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct StaticSourceConfig {
    /// Raw reading in millidegrees Celsius, as the kernel would print it.
    pub value: String,
}

pub struct StaticSource {
    value: String,
}

impl StaticSource {
    pub fn new(config: &StaticSourceConfig) -> Self {
        StaticSource {
            value: config.value.clone(),
        }
    }

    pub fn from_value(value: impl Into<String>) -> Self {
        StaticSource {
            value: value.into(),
        }
    }
}

impl SensorSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    fn read_raw(&self) -> Result<String, SensorError> {
        Ok(self.value.clone())
    }
}
