use garde::Validate;
use serde::{Deserialize, Serialize};

/// Body of `POST /analyze-mood`.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeMoodRequest {
    /// Base64-encoded image, optionally as a `data:` URL.
    #[garde(length(min = 1))]
    pub image: String,
}

/// Error body shared by every failed analysis.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Response for `GET /`.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}

/// Response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}
