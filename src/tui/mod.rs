//! TUI module: Terminal User Interface using Ratatui.
//!
//! A sidebar selects one of the five diseases; the main panel shows that
//! disease's form, its submit button and the last prediction.

mod app;
mod session;
mod styles;
mod ui;

pub use app::{App, Focus};
pub use session::{Session, SubmissionOutcome};
pub use styles::MedicalTheme;
pub use ui::form::FormState;
