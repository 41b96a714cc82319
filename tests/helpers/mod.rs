//! Router-level test helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use mood_detect_api::app_state::AppState;
use mood_detect_api::build_router;
use mood_detect_api::config::AppConfig;
use mood_detect_api::services::classifier::MoodClassifier;
use serde_json::Value;
use tower::ServiceExt;

/// Router with default config and the given classifier.
pub fn test_app(classifier: impl MoodClassifier + 'static) -> Router {
    test_app_with_config(classifier, &AppConfig::default())
}

pub fn test_app_with_config(classifier: impl MoodClassifier + 'static, config: &AppConfig) -> Router {
    // Uninstalled recorder: keeps tests independent of the global one.
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let state = AppState::new(Arc::new(classifier));
    build_router(state, Arc::new(handle), config)
}

/// POST a JSON body to `/analyze-mood`.
pub async fn post_analyze(app: Router, body: Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/analyze-mood")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}

/// Assert the uniform 500 failure shape and return its detail.
pub async fn assert_processing_error(response: Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let detail = body["detail"]
        .as_str()
        .expect("detail must be a string")
        .to_string();
    assert!(
        detail.starts_with("Error processing image:"),
        "unexpected detail: {}",
        detail
    );
    detail
}
