use std::ops::RangeInclusive;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::mood::MoodLabel;
use crate::services::codec::PixelBuffer;

/// Confidence range drawn by [`StubClassifier`].
pub const STUB_CONFIDENCE: RangeInclusive<f64> = 0.7..=0.95;

/// Raw classifier output.
///
/// The label is kept as text: classifiers may be external code and are not
/// trusted to stay inside the [`MoodLabel`] set.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

impl Prediction {
    pub fn new(label: MoodLabel, confidence: f64) -> Self {
        Self {
            label: label.to_string(),
            confidence,
        }
    }
}

/// Mood classification capability. Implementations must be shareable across
/// concurrent requests.
pub trait MoodClassifier: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    fn classify(&self, buffer: &PixelBuffer) -> Result<Prediction, ClassificationError>;
}

/// Placeholder classifier. It does NOT detect anything: pixel data is ignored
/// and the label is drawn uniformly at random.
pub struct StubClassifier<R = StdRng> {
    rng: Mutex<R>,
}

impl<R: Rng + Send> StubClassifier<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl StubClassifier<StdRng> {
    /// Deterministic stub, same seed gives the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng + Send> MoodClassifier for StubClassifier<R> {
    fn name(&self) -> &str {
        "stub"
    }

    fn classify(&self, _buffer: &PixelBuffer) -> Result<Prediction, ClassificationError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ClassificationError::Model("random source lock poisoned".to_string()))?;

        let label = MoodLabel::ALL[rng.random_range(0..MoodLabel::ALL.len())];
        let confidence = rng.random_range(STUB_CONFIDENCE);

        Ok(Prediction::new(label, confidence))
    }
}

/// Returns the same prediction for every buffer.
pub struct FixedClassifier {
    prediction: Prediction,
}

impl FixedClassifier {
    pub fn new(label: MoodLabel, confidence: f64) -> Self {
        Self {
            prediction: Prediction::new(label, confidence),
        }
    }

    /// Emit an arbitrary, possibly unknown, label.
    pub fn raw(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            prediction: Prediction {
                label: label.into(),
                confidence,
            },
        }
    }
}

impl MoodClassifier for FixedClassifier {
    fn name(&self) -> &str {
        "fixed"
    }

    fn classify(&self, _buffer: &PixelBuffer) -> Result<Prediction, ClassificationError> {
        Ok(self.prediction.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("classifier cannot process buffer: {0}")]
    UnsupportedBuffer(String),

    #[error("classifier returned confidence {0} outside [0, 1]")]
    InvalidConfidence(f64),

    #[error("classifier failed: {0}")]
    Model(String),
}
