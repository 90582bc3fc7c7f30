//! Classifier port: the one operation the application needs from a model.
//!
//! Any inference backend that can turn a single numeric row into a class
//! scalar satisfies this trait. The predictor never sees the concrete type.

/// Errors raised by a model while evaluating a row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("Feature count mismatch: got {got}, expected {expected}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Model evaluation failed: {0}")]
    Evaluation(String),
}

/// A loaded, immutable binary classifier.
pub trait Classifier: Send + Sync {
    /// Number of features the model was trained with.
    fn n_features(&self) -> usize;

    /// Predict the class of a single row.
    ///
    /// # Errors
    /// Returns `ClassifierError::ShapeMismatch` if `row.len()` differs from
    /// `n_features()`. Rows are never truncated or padded.
    fn predict(&self, row: &[f64]) -> Result<f64, ClassifierError>;

    /// Short model family name for logs.
    fn kind(&self) -> &'static str {
        "classifier"
    }
}
