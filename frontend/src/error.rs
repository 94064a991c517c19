//! Error taxonomy for everything the UI has to surface.
//!
//! Field-level validation failures are not errors in this sense; they are
//! boolean outcomes the form state tracks per field. The types here cover
//! the cases a modal reports after the user commits an action: a request
//! that came back non-success, a CSV export that could not be built, and
//! the export-specific local failures.

use thiserror::Error;

use crate::messages;

/// A save/delete/import call that came back non-success, categorized by
/// operation into the heading + message pair the failure banner shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{heading}: {message}")]
pub struct RequestError {
    pub heading: String,
    pub message: String,
}

impl RequestError {
    pub fn add_failed() -> Self {
        RequestError {
            heading: messages::ADD_FAILED_HEADING.to_string(),
            message: messages::ADD_API_ERROR.to_string(),
        }
    }

    pub fn update_failed() -> Self {
        RequestError {
            heading: messages::UPDATE_FAILED_HEADING.to_string(),
            message: messages::UPDATE_API_ERROR.to_string(),
        }
    }

    pub fn delete_failed() -> Self {
        RequestError {
            heading: messages::DELETE_FAILED_HEADING.to_string(),
            message: messages::DELETE_API_ERROR.to_string(),
        }
    }

    pub fn import_failed() -> Self {
        RequestError {
            heading: messages::IMPORT_FAILED_HEADING.to_string(),
            message: messages::IMPORT_API_ERROR.to_string(),
        }
    }

    pub fn export_failed(message: &str) -> Self {
        RequestError {
            heading: messages::EXPORT_FAILED_HEADING.to_string(),
            message: message.to_string(),
        }
    }
}

/// CSV construction failure. Export is all-or-nothing: the first malformed
/// record fails the whole file rather than producing partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expense row {row} is missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },
}

/// Everything the export modal can fail with, so each case keeps its own
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Start/end span more than the allowed number of days
    #[error("{}", messages::EXPORT_RANGE_ERROR)]
    RangeTooWide,
    /// Dates did not parse, or end precedes start
    #[error("{}", messages::EXPORT_INVALID_INPUT_ERROR)]
    InvalidRange,
    /// The range was fine but held no expenses
    #[error("{}", messages::EXPORT_NO_DATA_ERROR)]
    NoData,
    /// CSV construction failed; surfaced generically, details in the source
    #[error("{}", messages::CSV_CREATE_ERROR)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Request(#[from] RequestError),
}
