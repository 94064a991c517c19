//! Form validation and per-form state.
//!
//! `validators` holds the rule engine and the canonical rule sets for each
//! input field; `state` holds the form state machine the modals drive.

pub mod state;
pub mod validators;

pub use state::{FieldState, FormPreset, FormState, SubmitGuard, SubmitToken};
pub use validators::{validate, Rule};
