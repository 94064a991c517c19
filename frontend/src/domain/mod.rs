//! Domain logic behind the expense tracker views: budget metrics, the CSV
//! export codec, list ordering, and the operation handlers that sit between
//! modals and the API client.

pub mod csv;
pub mod handlers;
pub mod metrics;
pub mod sorting;
