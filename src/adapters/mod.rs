//! Adapters layer: Concrete implementations of ports.
//!
//! - `artifact`: JSON classifier artifacts (linear models, tree ensembles)
//! - `manifest`: SHA-256 integrity manifest for the model directory
//! - `redact`: measurement redaction for log output

pub mod artifact;
pub mod manifest;
pub mod redact;

pub use artifact::{load_classifier, ArtifactError};
pub use manifest::ModelManifest;
