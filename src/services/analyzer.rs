use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, warn};

use crate::models::analyze::ErrorResponse;
use crate::models::mood::MoodResult;
use crate::services::classifier::{ClassificationError, MoodClassifier};
use crate::services::codec::{DecodeError, ImageCodec};
use crate::services::recommendations;

/// Prefix of every error detail returned to clients.
pub const ERROR_PREFIX: &str = "Error processing image: ";

/// Runs the decode → classify → recommend pipeline.
pub struct MoodAnalyzer {
    classifier: Arc<dyn MoodClassifier>,
}

impl MoodAnalyzer {
    pub fn new(classifier: Arc<dyn MoodClassifier>) -> Self {
        Self { classifier }
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Analyze one base64 image. Blocking; call from a blocking context.
    pub fn analyze(&self, base64_text: &str) -> Result<MoodResult, AnalyzeError> {
        let start = Instant::now();
        metrics::counter!("mood_analysis_requests_total").increment(1);

        let result = self.run(base64_text);

        metrics::histogram!("mood_analysis_duration_seconds")
            .record(start.elapsed().as_secs_f64());

        match &result {
            Ok(outcome) => {
                metrics::counter!("mood_detected_total", "mood" => outcome.mood.to_string())
                    .increment(1);
                debug!(
                    mood = %outcome.mood,
                    confidence = outcome.confidence,
                    classifier = self.classifier.name(),
                    "Mood analysis completed"
                );
            }
            Err(e) => {
                metrics::counter!("mood_analysis_failures_total", "kind" => e.kind())
                    .increment(1);
                warn!(kind = e.kind(), error = %e, "Mood analysis failed");
            }
        }

        result
    }

    fn run(&self, base64_text: &str) -> Result<MoodResult, AnalyzeError> {
        let buffer = ImageCodec::decode(base64_text)?;
        let prediction = self.classifier.classify(&buffer)?;

        let confidence = prediction.confidence;
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ClassificationError::InvalidConfidence(confidence).into());
        }

        let mood = recommendations::resolve_label(&prediction.label);

        Ok(MoodResult {
            mood,
            confidence,
            recommendations: *recommendations::recommend(mood),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("{0}")]
    Unhandled(String),
}

impl AnalyzeError {
    /// Metric/log label for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzeError::InvalidRequest(_) => "invalid_request",
            AnalyzeError::Decode(_) => "decode",
            AnalyzeError::Classification(_) => "classification",
            AnalyzeError::Unhandled(_) => "unhandled",
        }
    }

    pub fn detail(&self) -> String {
        format!("{}{}", ERROR_PREFIX, self)
    }
}

/// Every failure kind is reported the same way: 500 with a prefixed detail.
impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.detail(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
