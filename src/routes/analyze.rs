use axum::extract::State;
use axum::Json;
use garde::Validate;

use crate::app_state::AppState;
use crate::models::analyze::AnalyzeMoodRequest;
use crate::models::mood::MoodResult;
use crate::services::analyzer::AnalyzeError;

/// POST /analyze-mood — classify the mood shown in a base64 image.
pub async fn analyze_mood(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeMoodRequest>,
) -> Result<Json<MoodResult>, AnalyzeError> {
    request
        .validate()
        .map_err(|e| AnalyzeError::InvalidRequest(e.to_string()))?;

    // Decoding is CPU-bound; keep it off the async workers.
    let analyzer = state.analyzer.clone();
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&request.image))
        .await
        .map_err(|e| AnalyzeError::Unhandled(e.to_string()))??;

    Ok(Json(result))
}
