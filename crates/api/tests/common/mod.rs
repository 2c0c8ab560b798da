use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use vigil_api::config::ServerConfig;
use vigil_api::router::build_app_router;
use vigil_api::state::AppState;
use vigil_events::EventBus;
use vigil_monitor::{MonitorConfig, VitalsMonitor};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. No AI gateway key is configured, so
/// analysis endpoints exercise the not-configured path.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        vitals_interval: Duration::from_secs(60),
        gateway_url: "http://localhost:9".to_string(),
        gateway_api_key: None,
        gateway_model: "google/gemini-2.5-flash".to_string(),
    }
}

/// Build the full application router with all middleware layers, plus
/// the monitor handle so tests can drive sampling explicitly.
///
/// The monitor starts *idle* with a deterministic seed and a 60-second
/// interval: no background tick interferes, and tests populate samples
/// via `monitor.refresh()` or the `/vitals/refresh` endpoint.
pub fn build_test_app() -> (Router, Arc<VitalsMonitor>) {
    let config = test_config();
    let event_bus = Arc::new(EventBus::default());

    let monitor = VitalsMonitor::start(
        MonitorConfig {
            interval: config.vitals_interval,
            seed: Some(1234),
            start_enabled: false,
        },
        Arc::clone(&event_bus),
    );

    let state = AppState {
        config: Arc::new(config.clone()),
        monitor: Arc::clone(&monitor),
        event_bus,
        gateway: None,
    };

    (build_app_router(state, &config), monitor)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body to the app.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
