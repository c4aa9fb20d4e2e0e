use std::sync::OnceLock;

use axum::body::Body;
use axum::http::{Request, Response};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

use tradelens::api::router::create_router;
use tradelens::config::AppConfig;
use tradelens::AppState;

/// The Prometheus recorder is process-global, so install it once per test binary.
fn metrics_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| tradelens::metrics::init_metrics().expect("Failed to install recorder"))
        .clone()
}

#[allow(dead_code)]
pub fn build_test_app() -> axum::Router {
    build_test_app_with(AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        ..AppConfig::default()
    })
}

pub fn build_test_app_with(config: AppConfig) -> axum::Router {
    let state = AppState {
        config,
        metrics_handle: metrics_handle(),
    };
    create_router(state)
}

#[allow(dead_code)]
pub async fn post_json(app: axum::Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn get(app: axum::Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
