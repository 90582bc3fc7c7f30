//! Integrity manifest for the model directory.
//!
//! `manifest.json` binds artifact file names to their SHA-256 digests:
//!
//! ```json
//! { "version": 1, "files": { "diabetes_model.json": "9f86d08..." } }
//! ```
//!
//! When present, every listed file must exist and hash to its digest before
//! the registry accepts any model.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::ArtifactError;

pub const MANIFEST_FILE: &str = "manifest.json";
const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelManifest {
    pub version: u32,
    pub files: BTreeMap<String, String>,
}

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

// Constant-time compare for ASCII hex digests.
fn constant_time_eq_str(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.as_bytes().iter().zip(b.as_bytes().iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

impl ModelManifest {
    /// Hash `files` inside `dir` into a new manifest.
    ///
    /// # Errors
    /// Returns `ArtifactError::Read` if a file cannot be read.
    pub fn build(dir: &Path, files: &[&str]) -> Result<Self, ArtifactError> {
        let mut hashes = BTreeMap::new();
        for name in files {
            let path = dir.join(name);
            let bytes = std::fs::read(&path).map_err(|source| ArtifactError::Read {
                path: path.clone(),
                source,
            })?;
            hashes.insert((*name).to_string(), sha256_hex(&bytes));
        }
        Ok(Self {
            version: MANIFEST_VERSION,
            files: hashes,
        })
    }

    /// Read `manifest.json` from `dir`, if there is one.
    ///
    /// # Errors
    /// Returns `ArtifactError::Integrity` if the manifest exists but is
    /// unreadable, malformed or of an unknown version.
    pub fn read(dir: &Path) -> Result<Option<Self>, ArtifactError> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read(&path)
            .map_err(|e| ArtifactError::Integrity(format!("failed to read manifest: {e}")))?;
        let manifest: Self = serde_json::from_slice(&content)
            .map_err(|e| ArtifactError::Integrity(format!("invalid manifest format: {e}")))?;
        if manifest.version != MANIFEST_VERSION {
            return Err(ArtifactError::Integrity(format!(
                "unsupported manifest version: {}",
                manifest.version
            )));
        }
        Ok(Some(manifest))
    }

    /// Whether `file` is bound by this manifest.
    #[must_use]
    pub fn covers(&self, file: &str) -> bool {
        self.files.contains_key(file)
    }

    /// Check every listed file against its digest.
    ///
    /// # Errors
    /// Returns `ArtifactError::Integrity` on a missing file or hash mismatch.
    pub fn verify(&self, dir: &Path) -> Result<(), ArtifactError> {
        if self.files.is_empty() {
            return Err(ArtifactError::Integrity("manifest lists no files".into()));
        }
        for (name, expected) in &self.files {
            let path = dir.join(name);
            let bytes = std::fs::read(&path).map_err(|e| {
                ArtifactError::Integrity(format!(
                    "manifest references missing/unreadable file {path:?}: {e}"
                ))
            })?;
            if !constant_time_eq_str(&sha256_hex(&bytes), expected) {
                return Err(ArtifactError::Integrity(format!(
                    "file hash mismatch for {name}"
                )));
            }
        }
        tracing::info!("Model manifest verified ({} files)", self.files.len());
        Ok(())
    }

    /// Write this manifest to `dir/manifest.json`.
    ///
    /// # Errors
    /// Returns `ArtifactError::Integrity` if serialization or the write fails.
    pub fn write(&self, dir: &Path) -> Result<(), ArtifactError> {
        let bytes = serde_json::to_vec_pretty(self)
            .map_err(|e| ArtifactError::Integrity(format!("failed to serialize manifest: {e}")))?;
        std::fs::write(dir.join(MANIFEST_FILE), bytes)
            .map_err(|e| ArtifactError::Integrity(format!("failed to write manifest: {e}")))
    }
}
