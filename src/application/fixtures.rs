//! Test doubles shared by unit tests across the crate.

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::{ModelRegistry, Predictor};
use crate::domain::{fields_for, Disease};
use crate::ports::{Classifier, ClassifierError};

/// Predicts 1 when the first feature is positive.
pub(crate) struct SignOfFirst {
    pub width: usize,
}

impl Classifier for SignOfFirst {
    fn n_features(&self) -> usize {
        self.width
    }

    fn predict(&self, row: &[f64]) -> Result<f64, ClassifierError> {
        if row.len() != self.width {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.width,
                got: row.len(),
            });
        }
        Ok(if row[0] > 0.0 { 1.0 } else { 0.0 })
    }
}

pub(crate) fn stub_registry() -> ModelRegistry {
    let models: HashMap<Disease, Arc<dyn Classifier>> = Disease::ALL
        .into_iter()
        .map(|d| {
            let model: Arc<dyn Classifier> = Arc::new(SignOfFirst {
                width: fields_for(d).len(),
            });
            (d, model)
        })
        .collect();
    ModelRegistry::from_models(models).expect("stub registry")
}

pub(crate) fn stub_predictor() -> Predictor {
    Predictor::new(Arc::new(stub_registry()))
}
