//! Prediction service: form values in, binary outcome out.

use std::sync::Arc;

use crate::application::ModelRegistry;
use crate::domain::{fields_for, Disease, InputValues, PredictionResult};
use crate::{MedscreenError, Result};

/// Routes a submission to the selected disease's model.
///
/// Holds no per-submission state, so repeated calls with the same values
/// give the same result.
#[derive(Debug, Clone)]
pub struct Predictor {
    registry: Arc<ModelRegistry>,
}

impl Predictor {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    /// Predict `disease` from form values.
    ///
    /// The row is built in schema order; unset fields are sent as 0.
    ///
    /// # Errors
    /// Returns `MedscreenError::ModelInvocation` if the model rejects the row.
    pub fn predict(&self, disease: Disease, values: &InputValues) -> Result<PredictionResult> {
        let fields = fields_for(disease);
        tracing::debug!(
            "Submitting {} form ({} of {} fields set)",
            disease,
            values.len(),
            fields.len()
        );
        let row = values.to_row(fields);
        self.predict_row(disease, &row)
    }

    /// Predict `disease` from an already ordered row.
    ///
    /// # Errors
    /// Returns `MedscreenError::ModelInvocation` if the row length does not
    /// match the model or evaluation fails.
    pub fn predict_row(&self, disease: Disease, row: &[f64]) -> Result<PredictionResult> {
        let model = self.registry.model(disease);
        let raw = model.predict(row).map_err(|source| {
            tracing::warn!("{} {} model failed: {}", disease, model.kind(), source);
            MedscreenError::ModelInvocation { disease, source }
        })?;

        let result = PredictionResult::from_raw(disease, raw);
        tracing::info!("Prediction complete for {} (outcome {})", disease, result.outcome);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::stub_predictor;
    use crate::ports::ClassifierError;

    #[test]
    fn test_positive_and_negative() {
        let predictor = stub_predictor();
        let mut values = InputValues::new();
        values.set("Pregnancies", 2.0);

        let result = predictor.predict(Disease::Diabetes, &values).expect("predict");
        assert!(result.is_positive());
        assert_eq!(result.label, "diabetic");

        let result = predictor
            .predict(Disease::Diabetes, &InputValues::new())
            .expect("predict");
        assert_eq!(result.outcome, 0);
        assert_eq!(result.label, "not diabetic");
    }

    #[test]
    fn test_unset_fields_are_zero() {
        let predictor = stub_predictor();
        let result = predictor
            .predict(Disease::HeartDisease, &InputValues::new())
            .expect("predict");
        assert_eq!(result.outcome, 0);
        assert!((result.raw_output - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_row_is_invocation_error() {
        let predictor = stub_predictor();
        let row = vec![1.0; 21];
        let err = predictor
            .predict_row(Disease::Parkinsons, &row)
            .expect_err("must fail");
        assert!(matches!(
            err,
            MedscreenError::ModelInvocation {
                disease: Disease::Parkinsons,
                source: ClassifierError::ShapeMismatch {
                    expected: 22,
                    got: 21
                }
            }
        ));
    }

    #[test]
    fn test_deterministic() {
        let predictor = stub_predictor();
        let values = InputValues::from_row(fields_for(Disease::Thyroid), &[41.0, 0.0, 0.0]);
        let first = predictor.predict(Disease::Thyroid, &values).expect("predict");
        let second = predictor.predict(Disease::Thyroid, &values).expect("predict");
        assert_eq!(first, second);
    }
}
