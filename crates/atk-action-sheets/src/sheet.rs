//! Action sheet wizard controller

use crate::action::AssetAction;
use crate::form_state::{create_action_form_store, ActionFormState, ActionStep};
use crate::store::Store;

/// Drives one action sheet through `values -> confirm`.
///
/// The sheet owns its step store unless one is supplied for shared control,
/// in which case the caller and the sheet observe the same state.
#[derive(Debug)]
pub struct ActionSheet {
    action: AssetAction,
    store: Store<ActionFormState>,
    open: bool,
}

impl ActionSheet {
    pub fn new(action: AssetAction) -> Self {
        Self {
            action,
            store: create_action_form_store(action.has_values_step()),
            open: false,
        }
    }

    /// Sheet driven by an externally owned store
    pub fn with_store(action: AssetAction, store: Store<ActionFormState>) -> Self {
        Self {
            action,
            store,
            open: false,
        }
    }

    pub fn action(&self) -> AssetAction {
        self.action
    }

    pub fn store(&self) -> &Store<ActionFormState> {
        &self.store
    }

    pub fn step(&self) -> ActionStep {
        self.store.state().step
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Move from the values form to the confirmation summary
    pub fn continue_to_confirm(&self) {
        tracing::debug!(action = %self.action, "action sheet -> confirm");
        self.store.update(|s| s.with_step(ActionStep::Confirm));
    }

    /// Whether a back button applies: only sheets with a values step, while confirming
    pub fn can_go_back(&self) -> bool {
        let state = self.store.state();
        state.has_values_step && state.step == ActionStep::Confirm
    }

    /// Return to the values form; false when the sheet has nowhere to go back to
    pub fn back_to_values(&self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        tracing::debug!(action = %self.action, "action sheet -> values");
        self.store.update(|s| s.with_step(ActionStep::Values));
        true
    }

    /// Close the sheet and reset it to its initial step
    pub fn close(&mut self) {
        self.open = false;
        self.store
            .update(|s| ActionFormState::initial(s.has_values_step));
    }
}
