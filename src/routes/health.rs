use axum::Json;

use crate::models::analyze::{HealthResponse, StatusMessage};

/// GET / — liveness banner.
pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Mood Detection API is running!",
    })
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "mood-detection-api",
    })
}
