//! Ports layer: Trait definitions for external operations.
//!
//! The classifier trait is the boundary between the application and
//! whatever library produced the model artifacts.

mod classifier;

pub use classifier::{Classifier, ClassifierError};
