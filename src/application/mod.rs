//! Application layer: Use cases and services.
//!
//! Loads every disease model once, then turns form values into
//! predictions for whichever disease is selected.

#[cfg(test)]
pub(crate) mod fixtures;
mod predictor;
mod registry;

pub use predictor::Predictor;
pub use registry::ModelRegistry;
