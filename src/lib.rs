//! Library exports for temperature-exporter, shared between the binary and tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod sensor;
pub mod startup;
pub mod state;
pub mod utils;
