//! The five diseases the screening form can predict.

use serde::{Deserialize, Serialize};

/// Disease key. Each variant owns exactly one model artifact and one field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Diabetes,
    HeartDisease,
    Parkinsons,
    LungCancer,
    Thyroid,
}

impl Disease {
    /// Sidebar order.
    pub const ALL: [Disease; 5] = [
        Disease::Diabetes,
        Disease::HeartDisease,
        Disease::Parkinsons,
        Disease::LungCancer,
        Disease::Thyroid,
    ];

    /// Stable key used in logs, the registry and artifact lookup.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::HeartDisease => "heart_disease",
            Self::Parkinsons => "parkinsons",
            Self::LungCancer => "lung_cancer",
            Self::Thyroid => "thyroid",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    /// Entry shown in the sidebar selector.
    #[must_use]
    pub fn menu_title(&self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes Prediction",
            Self::HeartDisease => "Heart Disease Prediction",
            Self::Parkinsons => "Parkinsons Prediction",
            Self::LungCancer => "Lung Cancer Prediction",
            Self::Thyroid => "Hypo-Thyroid Prediction",
        }
    }

    /// Heading of the form panel.
    #[must_use]
    pub fn page_title(&self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes Prediction",
            Self::HeartDisease => "Heart Disease Prediction",
            Self::Parkinsons => "Parkinson's Disease Prediction",
            Self::LungCancer => "Lung Cancer Prediction",
            Self::Thyroid => "Hypo-Thyroid Prediction",
        }
    }

    #[must_use]
    pub fn submit_caption(&self) -> &'static str {
        match self {
            Self::Diabetes => "Predict Diabetes",
            Self::HeartDisease => "Predict Heart Disease",
            Self::Parkinsons => "Predict Parkinson's Disease",
            Self::LungCancer => "Predict Lung Cancer",
            Self::Thyroid => "Predict Hypo-Thyroid",
        }
    }

    /// File name of the serialized classifier inside the model directory.
    #[must_use]
    pub fn artifact_file(&self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes_model.json",
            Self::HeartDisease => "heart_disease_model.json",
            Self::Parkinsons => "parkinsons_model.json",
            Self::LungCancer => "lungs_disease_model.json",
            Self::Thyroid => "Thyroid_model.json",
        }
    }

    /// Short outcome label for a positive or negative prediction.
    #[must_use]
    pub fn outcome_label(&self, positive: bool) -> &'static str {
        match (self, positive) {
            (Self::Diabetes, true) => "diabetic",
            (Self::Diabetes, false) => "not diabetic",
            (Self::HeartDisease, true) => "has heart disease",
            (Self::HeartDisease, false) => "does not have heart disease",
            (Self::Parkinsons, true) => "has Parkinson's disease",
            (Self::Parkinsons, false) => "does not have Parkinson's disease",
            (Self::LungCancer, true) => "has lung cancer",
            (Self::LungCancer, false) => "does not have lung cancer",
            (Self::Thyroid, true) => "has Hypo-Thyroid disease",
            (Self::Thyroid, false) => "does not have Hypo-Thyroid disease",
        }
    }

    /// Full sentence shown in the result panel.
    #[must_use]
    pub fn outcome_message(&self, positive: bool) -> String {
        let label = self.outcome_label(positive);
        match self {
            // "diabetic" reads as an adjective, the others carry their own verb.
            Self::Diabetes => format!("The person is {label}"),
            _ => format!("The person {label}"),
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
