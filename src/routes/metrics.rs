use axum::extract::State;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Register descriptions for the analysis metrics.
pub fn describe_metrics() {
    metrics::describe_counter!(
        "mood_analysis_requests_total",
        "Total mood analysis requests received"
    );
    metrics::describe_counter!(
        "mood_analysis_failures_total",
        "Mood analysis requests that failed, by failure kind"
    );
    metrics::describe_counter!("mood_detected_total", "Detected moods, by label");
    metrics::describe_histogram!(
        "mood_analysis_duration_seconds",
        "Time to decode, classify and map one image"
    );
}

/// Prometheus metrics scrape endpoint.
/// Returns metrics in Prometheus text exposition format.
pub async fn prometheus_metrics(State(handle): State<Arc<PrometheusHandle>>) -> impl IntoResponse {
    handle.render()
}
