//! ATK Action Sheets - state for the asset management action sheets
//!
//! Every management action (mint, burn, transfer, freeze, pause, role
//! management, KYC editing, claim issuance) opens a sheet that walks through
//! a values step and a confirm step before wallet verification. This crate
//! holds the reusable state pieces behind those sheets; rendering, forms and
//! transaction submission live elsewhere.
//!
//! - [`Store`] - observable value container
//! - [`ActionFormState`] - `{step, has_values_step}` of one sheet
//! - [`ActionSheet`] - wizard controller over a step store
//! - [`ActionMenu`] - which sheet the action dropdown has open

mod action;
mod form_state;
mod sheet;
mod store;

pub use action::{ActionMenu, AssetAction};
pub use form_state::{create_action_form_store, ActionFormState, ActionStep};
pub use sheet::ActionSheet;
pub use store::{Store, Subscription};
