//! Logic core of the expense tracker's browser frontend.
//!
//! Everything a view layer needs that is not presentation: field validation
//! and form state, the budget-progress math behind the monthly graph, the
//! CSV export codec and import gates, the REST client with its response
//! normalization, and the small pieces of shared UI state (refresh signal,
//! list ordering).
//!
//! View components own rendering and event wiring only; they call into this
//! crate for every decision that has a testable answer.

pub mod domain;
pub mod error;
pub mod forms;
pub mod messages;
pub mod services;
pub mod state;
