//! Per-run selection context for the presenter.

use zeroize::Zeroize;

use crate::application::Predictor;
use crate::domain::{Disease, PredictionResult};
use crate::tui::ui::form::FormState;
use crate::MedscreenError;

/// What the result panel shows after a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Result(PredictionResult),
    /// The model rejected this one submission.
    Failed(String),
}

/// The selected disease, its in-progress form and the last outcome.
///
/// Owned by the `App` and passed explicitly; there is no global selection.
pub struct Session {
    selected: Disease,
    form: FormState,
    outcome: Option<SubmissionOutcome>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Disease::Diabetes)
    }
}

impl Session {
    #[must_use]
    pub fn new(selected: Disease) -> Self {
        Self {
            selected,
            form: FormState::new(selected),
            outcome: None,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Disease {
        self.selected
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }

    /// Switch the form to `disease`. Entered values and the last outcome are
    /// discarded on any actual change. Returns whether the selection changed.
    pub fn select_disease(&mut self, disease: Disease) -> bool {
        if disease == self.selected {
            return false;
        }
        tracing::debug!("Selected {} (was {})", disease, self.selected);
        self.form.clear_sensitive();
        self.selected = disease;
        self.form = FormState::new(disease);
        self.outcome = None;
        true
    }

    pub fn show_result(&mut self, result: PredictionResult) {
        self.outcome = Some(SubmissionOutcome::Result(result));
    }

    /// Run the selected model on the current form.
    ///
    /// Unparseable input blocks the call and is reported on the form.
    /// A model failure is recorded as this submission's outcome. The form
    /// keeps its entries either way; only the collected row is wiped.
    pub fn submit(&mut self, predictor: &Predictor) {
        let mut values = match self.form.collect() {
            Ok(values) => values,
            Err(e) => {
                self.form.error_message = Some(e.to_string());
                return;
            }
        };

        match predictor.predict(self.selected, &values) {
            Ok(result) => self.show_result(result),
            Err(e @ MedscreenError::ModelInvocation { .. }) => {
                self.outcome = Some(SubmissionOutcome::Failed(e.to_string()));
            }
            Err(e) => {
                tracing::error!("Unexpected submission error: {}", e);
                self.outcome = Some(SubmissionOutcome::Failed(e.to_string()));
            }
        }

        values.zeroize();
    }
}
