//! Step state of the two-phase action sheet form

use serde::{Deserialize, Serialize};

use crate::store::Store;

/// Wizard step of an action sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStep {
    /// Form inputs are being entered
    Values,
    /// Summary is shown and the action awaits wallet verification
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionFormState {
    pub step: ActionStep,
    pub has_values_step: bool,
}

impl ActionFormState {
    /// Initial state: sheets without inputs start directly on the confirm step
    pub fn initial(has_values_step: bool) -> Self {
        Self {
            step: if has_values_step {
                ActionStep::Values
            } else {
                ActionStep::Confirm
            },
            has_values_step,
        }
    }

    pub fn with_step(self, step: ActionStep) -> Self {
        Self { step, ..self }
    }
}

/// Create the per-sheet store
pub fn create_action_form_store(has_values_step: bool) -> Store<ActionFormState> {
    Store::new(ActionFormState::initial(has_values_step))
}
