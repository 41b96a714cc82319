//! End-to-end tests against a running server.
//!
//! Run with: cargo test --test e2e_test -- --ignored --nocapture
//!
//! Set API_BASE_URL to override default (http://localhost:8000)

mod fixtures;

use fixtures::*;
use serde_json::{json, Value};

/// Get base URL from env or default to localhost
fn get_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

const MOODS: [&str; 7] = [
    "happy", "sad", "neutral", "angry", "surprised", "fear", "disgust",
];

#[tokio::test]
#[ignore] // Requires running API server
async fn test_e2e_health_check() {
    let response = reqwest::get(format!("{}/health", get_base_url()))
        .await
        .expect("Health check failed");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "healthy", "service": "mood-detection-api" }));

    println!("✓ Health check passed");
}

#[tokio::test]
#[ignore] // Requires running API server
async fn test_e2e_analyze_png() {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/analyze-mood", get_base_url()))
        .json(&json!({ "image": solid_png(64, [200, 120, 40]) }))
        .send()
        .await
        .expect("Analyze request failed");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();

    let mood = body["mood"].as_str().unwrap();
    assert!(MOODS.contains(&mood), "unexpected mood {}", mood);
    let confidence = body["confidence"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&confidence));
    assert!(!body["recommendations"]["music"].as_str().unwrap().is_empty());
    assert!(!body["recommendations"]["activity"].as_str().unwrap().is_empty());

    println!("✓ {} ({:.2})", mood, confidence);
}

#[tokio::test]
#[ignore] // Requires running API server
async fn test_e2e_invalid_image() {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/analyze-mood", get_base_url()))
        .json(&json!({ "image": "not-valid-base64!!" }))
        .send()
        .await
        .expect("Analyze request failed");

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Error processing image:"));
}
