use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Closed set of moods a classifier may report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Sad,
    Neutral,
    Angry,
    Surprised,
    Fear,
    Disgust,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 7] = [
        MoodLabel::Happy,
        MoodLabel::Sad,
        MoodLabel::Neutral,
        MoodLabel::Angry,
        MoodLabel::Surprised,
        MoodLabel::Fear,
        MoodLabel::Disgust,
    ];
}

/// Static advice attached to a mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationPair {
    pub music: &'static str,
    pub activity: &'static str,
}

/// Outcome of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodResult {
    pub mood: MoodLabel,
    pub confidence: f64,
    pub recommendations: RecommendationPair,
}
