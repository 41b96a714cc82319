use std::sync::Arc;

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

use mood_detect_api::app_state::AppState;
use mood_detect_api::build_router;
use mood_detect_api::config::AppConfig;
use mood_detect_api::routes;
use mood_detect_api::services::classifier::{MoodClassifier, StubClassifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().context("Failed to load configuration from environment")?;

    tracing::info!("Initializing mood detection server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus metrics recorder")?;
    let prometheus_handle = Arc::new(prometheus_handle);
    routes::metrics::describe_metrics();

    // The stub is placeholder scaffolding; swap in a real model here.
    let classifier: Arc<dyn MoodClassifier> = match config.classifier_seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded stub mood classifier");
            Arc::new(StubClassifier::seeded(seed))
        }
        None => {
            tracing::warn!("Using stub mood classifier: results are random, not detected");
            Arc::new(StubClassifier::from_entropy())
        }
    };

    let state = AppState::new(classifier);
    tracing::info!(
        classifier = state.analyzer.classifier_name(),
        "Mood analyzer ready"
    );
    let app = build_router(state, prometheus_handle, &config);

    let bind_addr = config.bind_addr();
    tracing::info!(origins = ?config.cors_origins, "Starting mood-detect-api on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
