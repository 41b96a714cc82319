use std::sync::Arc;

use crate::services::analyzer::MoodAnalyzer;
use crate::services::classifier::MoodClassifier;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<MoodAnalyzer>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn MoodClassifier>) -> Self {
        Self {
            analyzer: Arc::new(MoodAnalyzer::new(classifier)),
        }
    }
}
