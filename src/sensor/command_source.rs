//! Reads the temperature from the stdout of an external program.
//!
//! Meant for sandboxed hosts where the exporter cannot open the sysfs file
//! itself, e.g. `program: cat` with `args: [/sys/class/thermal/thermal_zone0/temp]`.

use super::SensorSource;
use crate::error::SensorError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::process::Command;
use tracing::debug;

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct CommandSourceConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    pub fn new(config: &CommandSourceConfig) -> Self {
        CommandSource {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }
}

impl SensorSource for CommandSource {
    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn read_raw(&self) -> Result<String, SensorError> {
        debug!("Running sensor command '{}'", self.describe());
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| SensorError::Unavailable {
                sensor: self.describe(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SensorError::Unavailable {
                sensor: self.describe(),
                detail: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn source(program: &str, args: &[&str]) -> CommandSource {
        CommandSource::new(&CommandSourceConfig {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        })
    }

    #[test]
    fn captures_stdout() {
        let raw = source("echo", &["48312"]).read_raw().unwrap();
        assert_eq!(raw, "48312\n");
    }

    #[test]
    fn non_zero_exit_is_unavailable() {
        let result = source("cat", &["/nonexistent/thermal/temp"]).read_raw();
        assert!(matches!(result, Err(SensorError::Unavailable { .. })));
    }

    #[test]
    fn missing_program_is_unavailable() {
        let result = source("/nonexistent/bin/sensor", &[]).read_raw();
        assert!(matches!(result, Err(SensorError::Unavailable { .. })));
    }

    #[test]
    fn describe_joins_program_and_args() {
        assert_eq!(
            source("cat", &["/sys/temp"]).describe(),
            "cat /sys/temp"
        );
    }
}
