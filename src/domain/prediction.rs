//! Prediction outcome types.

use serde::Serialize;

use super::Disease;

/// Binary outcome of one model call plus its human-readable rendering.
///
/// Derived on every submit and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub disease: Disease,

    /// 1 = disease predicted, 0 = not predicted
    pub outcome: u8,

    /// Scalar the model returned, kept for logging
    pub raw_output: f64,

    /// Outcome label, e.g. "diabetic" / "not diabetic"
    pub label: &'static str,
}

impl PredictionResult {
    /// Interpret a raw model output. Exactly `1` is positive; anything else,
    /// including NaN, is negative.
    #[must_use]
    pub fn from_raw(disease: Disease, raw_output: f64) -> Self {
        let positive = (raw_output - 1.0).abs() < f64::EPSILON;
        Self {
            disease,
            outcome: u8::from(positive),
            raw_output,
            label: disease.outcome_label(positive),
        }
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.outcome == 1
    }

    /// Sentence for the result panel.
    #[must_use]
    pub fn message(&self) -> String {
        self.disease.outcome_message(self.is_positive())
    }
}
