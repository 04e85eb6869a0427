use std::net::TcpListener;
use std::sync::Arc;

use temperature_exporter::config::Config;
use temperature_exporter::error::ExporterError;
use temperature_exporter::sensor::static_source::StaticSourceConfig;
use temperature_exporter::sensor::SensorConfig;
use temperature_exporter::startup::{build_state, run};

fn static_config() -> Config {
    Config {
        sensor: SensorConfig::Static(StaticSourceConfig {
            value: "45678".to_string(),
        }),
        ..Config::default()
    }
}

#[tokio::test]
async fn address_in_use_is_a_listener_error() {
    let taken = TcpListener::bind("127.0.0.1:0").expect("should bind an ephemeral port");
    let address = taken.local_addr().expect("listener should have an address");

    let config = Config {
        listen_address: address.to_string(),
        ..static_config()
    };
    let result = run(Arc::new(config)).await;

    match result {
        Err(ExporterError::Listener {
            address: reported, ..
        }) => assert_eq!(reported, address.to_string()),
        other => panic!("expected a listener error, got {:?}", other),
    }
}

#[tokio::test]
async fn unroutable_metrics_path_fails_before_serving() {
    let config = Config {
        telemetry_path: "/metrics/*".to_string(),
        ..static_config()
    };

    let result = build_state(Arc::new(config.clone()));
    assert!(matches!(result, Err(ExporterError::Config(_))));

    let result = run(Arc::new(config)).await;
    assert!(matches!(result, Err(ExporterError::Config(_))));
}

#[test]
fn invalid_namespace_fails_state_construction() {
    let config = Config {
        namespace: "not-valid".to_string(),
        ..static_config()
    };
    assert!(matches!(
        build_state(Arc::new(config)),
        Err(ExporterError::Registry(_))
    ));
}
