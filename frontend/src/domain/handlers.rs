//! Operation handlers between the modals and the API client.
//!
//! Each handler runs one user-committed action end to end and maps any
//! non-success into the error the modal surfaces. Entity kinds are a tagged
//! sum dispatched by `match`, so adding a kind is a compile error until
//! every operation handles it.

use shared::{Category, Expense};

use crate::domain::csv::{self, ImportPayload};
use crate::error::{ExportError, RequestError};
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;

const COMPONENT: &str = "response-handler";

/// Longest start-to-end span the export endpoint will be asked for.
pub const EXPORT_MAX_RANGE_DAYS: i64 = 60;

/// A record to create or update, tagged by entity kind.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityDraft {
    Category(Category),
    Expense(Expense),
}

/// A record to delete, tagged by entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityId {
    Category(String),
    Expense(String),
}

/// Check an export range locally, before any network call.
pub fn validate_export_range(start_ms: i64, end_ms: i64) -> Result<(), ExportError> {
    let days = date_utils::days_between(start_ms, end_ms);
    if days < 0 {
        return Err(ExportError::InvalidRange);
    }
    if days > EXPORT_MAX_RANGE_DAYS {
        return Err(ExportError::RangeTooWide);
    }
    Ok(())
}

/// Runs create/update/delete/import/export operations and classifies their
/// failures.
#[derive(Debug, Clone)]
pub struct ResponseHandler {
    client: ApiClient,
}

impl ResponseHandler {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, draft: EntityDraft) -> Result<(), RequestError> {
        let response = match &draft {
            EntityDraft::Category(category) => self.client.create_category(category).await,
            EntityDraft::Expense(expense) => self.client.create_expense(expense).await,
        };
        if response.is_success() {
            Ok(())
        } else {
            Logger::warn_with_component(COMPONENT, &format!("create failed ({})", response.status));
            Err(RequestError::add_failed())
        }
    }

    pub async fn update(&self, draft: EntityDraft) -> Result<(), RequestError> {
        let response = match &draft {
            EntityDraft::Category(category) => self.client.update_category(category).await,
            EntityDraft::Expense(expense) => self.client.update_expense(expense).await,
        };
        if response.is_success() {
            Ok(())
        } else {
            Logger::warn_with_component(COMPONENT, &format!("update failed ({})", response.status));
            Err(RequestError::update_failed())
        }
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), RequestError> {
        let response = match &id {
            EntityId::Category(category_id) => self.client.delete_category(category_id).await,
            EntityId::Expense(expense_id) => self.client.delete_expense(expense_id).await,
        };
        if response.is_success() {
            Ok(())
        } else {
            Logger::warn_with_component(COMPONENT, &format!("delete failed ({})", response.status));
            Err(RequestError::delete_failed())
        }
    }

    /// Bulk-create expenses from an imported file.
    pub async fn bulk_import(&self, payload: &ImportPayload) -> Result<(), RequestError> {
        let response = self.client.bulk_create_expenses(payload).await;
        if response.is_success() {
            Ok(())
        } else {
            Logger::warn_with_component(COMPONENT, &format!("import failed ({})", response.status));
            Err(RequestError::import_failed())
        }
    }

    /// Fetch a date range and format it as CSV lines, ready for download.
    ///
    /// The range gate runs before any network traffic; an empty result is
    /// its own failure so the modal can say so instead of downloading a
    /// header-only file.
    pub async fn export_range(&self, start_date: &str, end_date: &str) -> Result<Vec<String>, ExportError> {
        let start_ms = date_utils::parse_date_ms(start_date).ok_or(ExportError::InvalidRange)?;
        let end_ms = date_utils::parse_date_ms(end_date).ok_or(ExportError::InvalidRange)?;
        validate_export_range(start_ms, end_ms)?;

        let expenses = self.client.load_expenses_by_date_range(start_date, end_date).await;
        if expenses.is_empty() {
            return Err(ExportError::NoData);
        }

        let lines = csv::to_csv_lines(&expenses)?;
        Logger::info_with_component(
            COMPONENT,
            &format!("prepared {} expense rows for export", lines.len() - 1),
        );
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 86_400_000;

    #[test]
    fn test_export_range_within_limit() {
        assert_eq!(validate_export_range(0, 0), Ok(()));
        assert_eq!(validate_export_range(0, 60 * DAY_MS), Ok(()));
    }

    #[test]
    fn test_export_range_too_wide() {
        assert_eq!(
            validate_export_range(0, 60 * DAY_MS + 1),
            Err(ExportError::RangeTooWide)
        );
        assert_eq!(
            validate_export_range(0, 90 * DAY_MS),
            Err(ExportError::RangeTooWide)
        );
    }

    #[test]
    fn test_export_range_reversed_is_invalid() {
        assert_eq!(
            validate_export_range(5 * DAY_MS, 0),
            Err(ExportError::InvalidRange)
        );
    }
}
