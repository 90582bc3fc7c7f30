//! # Medscreen
//!
//! Terminal screening form that forwards patient measurements to one of
//! five pre-trained disease classifiers and shows a binary prediction.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Diseases, ordered field schemas, form values, outcomes
//! - `ports`: The `Classifier` trait every loaded model satisfies
//! - `adapters`: JSON model artifacts, integrity manifest, log redaction
//! - `application`: Model registry and predictor
//! - `tui`: Selection session and terminal user interface
//! - `config`: Environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{fields_for, Disease, FieldKind, FieldSpec, InputValues, PredictionResult};

/// Result type for Medscreen operations
pub type Result<T> = std::result::Result<T, MedscreenError>;

/// Main error type for Medscreen
#[derive(Debug, thiserror::Error)]
pub enum MedscreenError {
    /// Fatal: the registry could not load every model.
    #[error("Model registry unusable: {0}")]
    StartupLoad(#[from] adapters::ArtifactError),

    /// One submission failed; the session keeps running.
    #[error("{disease} model rejected the input: {source}")]
    ModelInvocation {
        disease: Disease,
        #[source]
        source: ports::ClassifierError,
    },

    /// A field could not be read as a number; submission is blocked.
    #[error("{field}: Invalid number")]
    InputCoercion { field: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
