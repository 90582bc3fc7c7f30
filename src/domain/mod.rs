//! Domain layer: diseases, field schemas, form values and outcomes.
//!
//! Pure types with no I/O.

mod disease;
mod input;
mod prediction;
pub mod schema;

pub use disease::Disease;
pub use input::InputValues;
pub use prediction::PredictionResult;
pub use schema::{fields_for, FieldKind, FieldSpec};
