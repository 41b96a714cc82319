//! Static mood → recommendation table.

use std::str::FromStr;

use tracing::warn;

use crate::models::mood::{MoodLabel, RecommendationPair};

const HAPPY: RecommendationPair = RecommendationPair {
    music: "Upbeat and energetic songs to maintain your positive energy! Try pop, dance, or upbeat rock music.",
    activity: "Share your joy! Call a friend, engage in creative activities, or go for a walk to spread positivity.",
};

const SAD: RecommendationPair = RecommendationPair {
    music: "Gentle, comforting melodies to help process your emotions. Try soft acoustic, classical, or ambient music.",
    activity: "Try gentle yoga, journaling to process your feelings, or take a warm bath to comfort yourself.",
};

const NEUTRAL: RecommendationPair = RecommendationPair {
    music: "Peaceful instrumental music to maintain your balance. Try lo-fi, nature sounds, or soft jazz.",
    activity: "Perfect time for meditation, mindful reading, or taking a peaceful walk in nature.",
};

const ANGRY: RecommendationPair = RecommendationPair {
    music: "Calming sounds to help you find inner peace. Try classical music, meditation sounds, or gentle instrumental.",
    activity: "Deep breathing exercises, progressive muscle relaxation, or a short walk to release tension.",
};

const SURPRISED: RecommendationPair = RecommendationPair {
    music: "Focused, motivating music to channel your energy. Try upbeat instrumental or motivational tracks.",
    activity: "Great time for learning something new, exercising, or engaging in creative problem-solving.",
};

const FEAR: RecommendationPair = RecommendationPair {
    music: "Soothing, calming music to reduce anxiety. Try nature sounds, soft classical, or meditation music.",
    activity: "Take deep breaths, practice grounding techniques, or do gentle stretching to calm your nervous system.",
};

const DISGUST: RecommendationPair = RecommendationPair {
    music: "Uplifting and positive music to shift your mood. Try happy pop songs or cheerful instrumental music.",
    activity: "Change your environment, engage in something you enjoy, or practice gratitude to shift perspective.",
};

/// Recommendations for a known mood.
pub fn recommend(mood: MoodLabel) -> &'static RecommendationPair {
    match mood {
        MoodLabel::Happy => &HAPPY,
        MoodLabel::Sad => &SAD,
        MoodLabel::Neutral => &NEUTRAL,
        MoodLabel::Angry => &ANGRY,
        MoodLabel::Surprised => &SURPRISED,
        MoodLabel::Fear => &FEAR,
        MoodLabel::Disgust => &DISGUST,
    }
}

/// Map a raw label onto the closed set. Anything unknown becomes `neutral`.
pub fn resolve_label(label: &str) -> MoodLabel {
    MoodLabel::from_str(label).unwrap_or_else(|_| {
        warn!(label, "Unknown mood label, falling back to neutral");
        MoodLabel::Neutral
    })
}

/// Recommendations for a raw label, with the neutral fallback.
pub fn recommend_for(label: &str) -> &'static RecommendationPair {
    recommend(resolve_label(label))
}
