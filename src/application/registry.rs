//! Model registry: every disease model, loaded once at startup.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::adapters::{load_classifier, ArtifactError, ModelManifest};
use crate::domain::{fields_for, Disease};
use crate::ports::Classifier;
use crate::Result;

/// Immutable set of loaded classifiers, one per `Disease`.
///
/// Construction either yields all five models or fails; there is no
/// partially loaded registry. Nothing can be swapped in after load.
pub struct ModelRegistry {
    /// Indexed by `Disease as usize`, i.e. in `Disease::ALL` order.
    models: Vec<Arc<dyn Classifier>>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.models.len())
            .finish()
    }
}

impl ModelRegistry {
    /// Load all five artifacts from `model_dir`.
    ///
    /// If `manifest.json` exists its digests are verified first. With
    /// `require_manifest`, a missing manifest or one that does not bind
    /// every artifact is fatal.
    ///
    /// # Errors
    /// Returns `MedscreenError::StartupLoad` if the directory, manifest or
    /// any artifact is missing, unreadable, corrupt or of the wrong width.
    pub fn load_all(model_dir: &Path, require_manifest: bool) -> Result<Self> {
        tracing::info!("Loading disease models from {:?}", model_dir);

        if !model_dir.is_dir() {
            tracing::error!("Model directory not found at {:?}", model_dir);
            return Err(ArtifactError::Missing(model_dir.to_path_buf()).into());
        }

        match ModelManifest::read(model_dir)? {
            Some(manifest) => {
                if require_manifest {
                    if let Some(unbound) = Disease::ALL
                        .iter()
                        .find(|d| !manifest.covers(d.artifact_file()))
                    {
                        return Err(ArtifactError::Integrity(format!(
                            "manifest does not bind {}",
                            unbound.artifact_file()
                        ))
                        .into());
                    }
                }
                manifest.verify(model_dir)?;
            }
            None if require_manifest => {
                return Err(ArtifactError::Integrity(format!(
                    "manifest.json required in {model_dir:?}"
                ))
                .into());
            }
            None => tracing::warn!("No model manifest found; loading artifacts unverified"),
        }

        let mut models: HashMap<Disease, Arc<dyn Classifier>> = HashMap::new();
        for disease in Disease::ALL {
            let path = model_dir.join(disease.artifact_file());
            let model = load_classifier(&path).map_err(|e| {
                tracing::error!("Failed to load {} model: {}", disease, e);
                e
            })?;
            models.insert(disease, model);
        }

        Self::from_models(models)
    }

    /// Build a registry from already-loaded classifiers.
    ///
    /// Every model's input width is checked against its form schema here, so
    /// a mismatched artifact fails at startup instead of on first submit.
    ///
    /// # Errors
    /// Returns `MedscreenError::StartupLoad` if a disease has no model or a
    /// model's feature count differs from its schema.
    pub fn from_models(mut models: HashMap<Disease, Arc<dyn Classifier>>) -> Result<Self> {
        let mut ordered = Vec::with_capacity(Disease::ALL.len());
        for disease in Disease::ALL {
            let model = models
                .remove(&disease)
                .ok_or_else(|| ArtifactError::NotRegistered(disease.key().to_string()))?;

            let schema = fields_for(disease).len();
            if model.n_features() != schema {
                return Err(ArtifactError::WidthMismatch {
                    disease: disease.key().to_string(),
                    schema,
                    model: model.n_features(),
                }
                .into());
            }
            ordered.push(model);
        }

        tracing::info!("Model registry ready ({} models)", ordered.len());
        Ok(Self { models: ordered })
    }

    /// The classifier for `disease`.
    #[must_use]
    pub fn model(&self, disease: Disease) -> &dyn Classifier {
        self.models[disease as usize].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::manifest::MANIFEST_FILE;
    use crate::MedscreenError;
    use tempfile::tempdir;

    fn linear_artifact(width: usize) -> String {
        let names: Vec<String> = (0..width).map(|i| format!("\"f{i}\"")).collect();
        let coefs = vec!["0.1"; width].join(",");
        format!(
            r#"{{"type":"linear","feature_names":[{}],"coefficients":[{coefs}],"intercept":-1.0}}"#,
            names.join(",")
        )
    }

    fn write_models(dir: &Path) {
        for disease in Disease::ALL {
            std::fs::write(
                dir.join(disease.artifact_file()),
                linear_artifact(fields_for(disease).len()),
            )
            .expect("write artifact");
        }
    }

    #[test]
    fn test_load_all() {
        let temp = tempdir().expect("tempdir");
        write_models(temp.path());

        let registry = ModelRegistry::load_all(temp.path(), false).expect("load");
        for disease in Disease::ALL {
            assert_eq!(registry.model(disease).n_features(), fields_for(disease).len());
        }
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let temp = tempdir().expect("tempdir");
        write_models(temp.path());
        std::fs::remove_file(temp.path().join(Disease::Thyroid.artifact_file())).expect("rm");

        let err = ModelRegistry::load_all(temp.path(), false).expect_err("must fail");
        assert!(matches!(
            err,
            MedscreenError::StartupLoad(ArtifactError::Missing(_))
        ));
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let temp = tempdir().expect("tempdir");
        let err = ModelRegistry::load_all(&temp.path().join("absent"), false)
            .expect_err("must fail");
        assert!(matches!(err, MedscreenError::StartupLoad(_)));
    }

    #[test]
    fn test_width_mismatch_is_fatal() {
        let temp = tempdir().expect("tempdir");
        write_models(temp.path());
        std::fs::write(
            temp.path().join(Disease::Parkinsons.artifact_file()),
            linear_artifact(21),
        )
        .expect("write");

        let err = ModelRegistry::load_all(temp.path(), false).expect_err("must fail");
        assert!(matches!(
            err,
            MedscreenError::StartupLoad(ArtifactError::WidthMismatch {
                schema: 22,
                model: 21,
                ..
            })
        ));
    }

    #[test]
    fn test_manifest_verified_when_present() {
        let temp = tempdir().expect("tempdir");
        write_models(temp.path());
        let files: Vec<&str> = Disease::ALL.iter().map(|d| d.artifact_file()).collect();
        ModelManifest::build(temp.path(), &files)
            .expect("build")
            .write(temp.path())
            .expect("write manifest");

        ModelRegistry::load_all(temp.path(), true).expect("verified load");

        std::fs::write(
            temp.path().join(Disease::Diabetes.artifact_file()),
            linear_artifact(8).replace("-1.0", "5.0"),
        )
        .expect("tamper");
        let err = ModelRegistry::load_all(temp.path(), false).expect_err("must fail");
        assert!(matches!(
            err,
            MedscreenError::StartupLoad(ArtifactError::Integrity(_))
        ));
    }

    #[test]
    fn test_required_manifest_must_exist_and_bind_all() {
        let temp = tempdir().expect("tempdir");
        write_models(temp.path());
        assert!(ModelRegistry::load_all(temp.path(), true).is_err());

        ModelManifest::build(temp.path(), &[Disease::Diabetes.artifact_file()])
            .expect("build")
            .write(temp.path())
            .expect("write manifest");
        assert!(temp.path().join(MANIFEST_FILE).exists());

        let err = ModelRegistry::load_all(temp.path(), true).expect_err("must fail");
        assert!(err.to_string().contains("does not bind"));
        // Optional mode accepts a partial manifest.
        ModelRegistry::load_all(temp.path(), false).expect("partial manifest ok");
    }
}
