//! User-facing response messages, collected in one place so modals and
//! handlers surface consistent wording.

/// Default message when a request never produced a server response.
pub const SEND_REQUEST_ERROR: &str =
    "Unable to send request. Please check your connection and try again.";

pub const ADD_FAILED_HEADING: &str = "Add Failed";
pub const ADD_API_ERROR: &str = "Unable to save the new entry. Please check inputs and try again.";

pub const UPDATE_FAILED_HEADING: &str = "Update Failed";
pub const UPDATE_API_ERROR: &str = "Unable to save your changes. Please check inputs and try again.";

pub const DELETE_FAILED_HEADING: &str = "Delete Failed";
pub const DELETE_API_ERROR: &str = "Unable to delete the selected entry. Please try again.";

pub const IMPORT_FAILED_HEADING: &str = "Import Failed";
pub const IMPORT_API_ERROR: &str =
    "Import failed. Please ensure the file is of type 'csv' then try again.";

pub const EXPORT_FAILED_HEADING: &str = "Export Failed";
pub const EXPORT_RANGE_ERROR: &str =
    "Maximum range is 60 days. Please correct inputs and try again.";
pub const EXPORT_INVALID_INPUT_ERROR: &str =
    "Invalid inputs. Please check inputs and try again.";
pub const EXPORT_NO_DATA_ERROR: &str =
    "No expenses found for selected time period. Please check inputs and try again.";

pub const CSV_CREATE_ERROR: &str = "Unable to create CSV file from expense data.";
