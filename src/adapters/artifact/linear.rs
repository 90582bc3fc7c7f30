//! Linear decision-function models (logistic regression, linear SVM).

use serde::{Deserialize, Serialize};

use crate::ports::{Classifier, ClassifierError};

/// Exported parameters of a linear classifier with an optional standard scaler.
///
/// Class 1 is predicted when `w · x' + b > 0`, where
/// `x' = (x - scaler_mean) / scaler_scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler_mean: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler_scale: Option<Vec<f64>>,
}

impl LinearModel {
    /// Sanity-check exported parameters.
    ///
    /// # Errors
    /// Returns a description of the first inconsistency found.
    pub fn validate(&self) -> Result<(), String> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err("feature_names is empty".into());
        }
        if self.coefficients.len() != n {
            return Err(format!(
                "coefficients has {} entries, expected {n}",
                self.coefficients.len()
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("non-finite coefficient".into());
        }
        if let Some(mean) = &self.scaler_mean {
            if mean.len() != n {
                return Err(format!("scaler_mean has {} entries, expected {n}", mean.len()));
            }
        }
        if let Some(scale) = &self.scaler_scale {
            if scale.len() != n {
                return Err(format!(
                    "scaler_scale has {} entries, expected {n}",
                    scale.len()
                ));
            }
            if scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
                return Err("scaler_scale must be finite and non-zero".into());
            }
        }
        Ok(())
    }

    /// Signed distance to the separating hyperplane.
    fn decision_function(&self, row: &[f64]) -> f64 {
        row.iter()
            .enumerate()
            .map(|(i, x)| {
                let mean = self.scaler_mean.as_ref().map_or(0.0, |m| m[i]);
                let scale = self.scaler_scale.as_ref().map_or(1.0, |s| s[i]);
                self.coefficients[i] * ((x - mean) / scale)
            })
            .sum::<f64>()
            + self.intercept
    }
}

impl Classifier for LinearModel {
    fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    fn predict(&self, row: &[f64]) -> Result<f64, ClassifierError> {
        if row.len() != self.n_features() {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.n_features(),
                got: row.len(),
            });
        }
        Ok(if self.decision_function(row) > 0.0 { 1.0 } else { 0.0 })
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearModel {
        LinearModel {
            feature_names: vec!["a".into(), "b".into()],
            coefficients: vec![1.0, -1.0],
            intercept: 0.0,
            scaler_mean: None,
            scaler_scale: None,
        }
    }

    #[test]
    fn test_decision_sign() {
        let m = model();
        assert_eq!(m.predict(&[2.0, 1.0]), Ok(1.0));
        assert_eq!(m.predict(&[1.0, 2.0]), Ok(0.0));
        // On the boundary sklearn predicts the negative class.
        assert_eq!(m.predict(&[1.0, 1.0]), Ok(0.0));
    }

    #[test]
    fn test_scaler_applied() {
        let mut m = model();
        m.scaler_mean = Some(vec![10.0, 0.0]);
        m.scaler_scale = Some(vec![2.0, 1.0]);
        // (12 - 10) / 2 - 0.5 = 0.5 > 0
        assert_eq!(m.predict(&[12.0, 0.5]), Ok(1.0));
        // (10 - 10) / 2 - 0.5 < 0
        assert_eq!(m.predict(&[10.0, 0.5]), Ok(0.0));
    }

    #[test]
    fn test_shape_mismatch() {
        let err = model().predict(&[1.0]).expect_err("must reject short row");
        assert_eq!(err, ClassifierError::ShapeMismatch { expected: 2, got: 1 });
        assert!(model().predict(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(model().validate().is_ok());

        let mut bad = model();
        bad.coefficients.pop();
        assert!(bad.validate().is_err());

        let mut zero_scale = model();
        zero_scale.scaler_scale = Some(vec![1.0, 0.0]);
        assert!(zero_scale.validate().is_err());
    }
}
