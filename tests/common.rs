#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response};
use axum::Router;
use temperature_exporter::config::Config;
use temperature_exporter::error::SensorError;
use temperature_exporter::metrics::Metrics;
use temperature_exporter::routes::create_router;
use temperature_exporter::sensor::{SensorSource, TemperatureReader};
use temperature_exporter::state::AppState;

/// Always fails as if the thermal zone were missing.
pub struct MissingSensor;

impl SensorSource for MissingSensor {
    fn describe(&self) -> String {
        "/nonexistent/thermal_zone0/temp".to_string()
    }

    fn read_raw(&self) -> Result<String, SensorError> {
        Err(SensorError::Unavailable {
            sensor: self.describe(),
            detail: "No such file or directory (os error 2)".to_string(),
        })
    }
}

/// Blocks inside every read and records how many reads overlapped.
#[derive(Clone, Default)]
pub struct SlowSensor {
    pub in_flight: Arc<AtomicUsize>,
    pub max_in_flight: Arc<AtomicUsize>,
    pub reads: Arc<AtomicUsize>,
}

impl SensorSource for SlowSensor {
    fn describe(&self) -> String {
        "slow".to_string()
    }

    fn read_raw(&self) -> Result<String, SensorError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok("51234\n".to_string())
    }
}

pub fn build_app(config: Config, source: impl SensorSource + 'static) -> Router {
    let metrics = Metrics::new(&config.namespace, TemperatureReader::new(Box::new(source)))
        .expect("metrics should build");
    let state = AppState {
        config: Arc::new(config),
        metrics,
    };
    create_router(state)
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}
