//! Browser-facing services: the REST client, file plumbing, date helpers,
//! and console logging.

pub mod api;
pub mod date_utils;
pub mod files;
pub mod logging;
