//! JSON classifier artifacts.
//!
//! Each artifact is a tagged JSON document exported by the training
//! pipeline:
//!
//! ```json
//! { "type": "linear", "feature_names": [...], "coefficients": [...], "intercept": -0.4 }
//! { "type": "forest", "feature_names": [...], "trees": [{ "nodes": [...] }] }
//! ```
//!
//! Loading parses, sanity-checks and returns the model behind the
//! `Classifier` port. Nothing else in the crate knows these shapes.

mod forest;
mod linear;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ports::Classifier;

pub use forest::{DecisionTree, ForestModel, TreeNode};
pub use linear::LinearModel;

/// Errors raised while loading model artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Model artifact not found at {0:?}")]
    Missing(PathBuf),

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt model artifact {path:?}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("{disease} model expects {model} features but its form declares {schema}")]
    WidthMismatch {
        disease: String,
        schema: usize,
        model: usize,
    },

    #[error("No model registered for {0}")]
    NotRegistered(String),

    #[error("Integrity check failed: {0}")]
    Integrity(String),
}

/// Serialized model, tagged by family.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    Forest(ForestModel),
}

impl ModelArtifact {
    fn validate(&self) -> Result<(), String> {
        match self {
            Self::Linear(m) => m.validate(),
            Self::Forest(m) => m.validate(),
        }
    }

    fn into_classifier(self) -> Arc<dyn Classifier> {
        match self {
            Self::Linear(m) => Arc::new(m),
            Self::Forest(m) => Arc::new(m),
        }
    }
}

/// Load and validate one artifact file.
///
/// # Errors
/// Returns `ArtifactError::Missing` if the file does not exist, `Read` on
/// I/O failure, and `Corrupt` if the JSON does not parse or fails sanity
/// checks.
pub fn load_classifier(path: &Path) -> Result<Arc<dyn Classifier>, ArtifactError> {
    if !path.is_file() {
        return Err(ArtifactError::Missing(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let artifact: ModelArtifact =
        serde_json::from_str(&content).map_err(|e| ArtifactError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    artifact.validate().map_err(|reason| ArtifactError::Corrupt {
        path: path.to_path_buf(),
        reason,
    })?;

    let classifier = artifact.into_classifier();
    tracing::info!(
        "Loaded {} model from {:?} (n_features={})",
        classifier.kind(),
        path,
        classifier.n_features()
    );
    Ok(classifier)
}
