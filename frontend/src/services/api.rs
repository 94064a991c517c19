//! API client for the expense tracker backend.
//!
//! Every call funnels through `send_request`, which normalizes whatever
//! happens — success, server error, transport failure, unparseable body —
//! into an `ApiResponse`. Nothing in here panics or propagates a raw
//! network error; callers decide what a non-success response means.
//!
//! Load-type calls return an empty collection on failure (logged), matching
//! how the views treat a failed load: render the empty state, keep going.
//! Mutation calls hand the raw `ApiResponse` to the handler layer, which
//! turns non-success into the per-operation error the modal shows.

use gloo::net::http::{Request, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

use shared::{
    ApiCategory, ApiExpense, BulkImportRequest, Category, CategoryExpensesRequest,
    DeleteCategoryRequest, DeleteExpenseRequest, Expense, ExpensePeriod, ExpenseRangeRequest,
    GetCategoryRequest, GetExpenseRequest, UserCategoriesRequest, UserExpensesRequest,
};

use crate::domain::csv::ImportPayload;
use crate::messages;
use crate::services::logging::Logger;

const COMPONENT: &str = "api-client";

/// Connection settings for the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Id the backend scopes every request to
    pub user_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            user_id: "1".to_string(),
        }
    }
}

/// Normalized outcome of one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// The response body's `detail` payload: data on success, a
    /// user-facing message on failure
    pub message: Value,
}

impl ApiResponse {
    /// 200 ok, 201 created, 207 partial bulk success.
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200 | 201 | 207)
    }

    fn failure() -> Self {
        ApiResponse {
            status: 500,
            message: Value::String(messages::SEND_REQUEST_ERROR.to_string()),
        }
    }
}

enum HttpMethod {
    Post,
    Patch,
    Delete,
}

/// Client for the expense tracker REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client with the default connection settings.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
        }
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn expense_url(&self, operation: &str) -> String {
        format!("{}/expense/expenses/{}", self.config.base_url, operation)
    }

    fn category_url(&self, operation: &str) -> String {
        format!("{}/dashboard/categories/{}", self.config.base_url, operation)
    }

    /// Send one JSON request and normalize the outcome.
    async fn send_request(&self, url: &str, method: HttpMethod, body: &impl Serialize) -> ApiResponse {
        let builder: RequestBuilder = match method {
            HttpMethod::Post => Request::post(url),
            HttpMethod::Patch => Request::patch(url),
            HttpMethod::Delete => Request::delete(url),
        };

        let request = match builder.json(body) {
            Ok(request) => request,
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("failed to serialize request: {}", e));
                return ApiResponse::failure();
            }
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("request to {} failed: {}", url, e));
                return ApiResponse::failure();
            }
        };

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("unparseable response from {}: {}", url, e));
                return ApiResponse::failure();
            }
        };
        let message = body.get("detail").cloned().unwrap_or(body);

        ApiResponse { status, message }
    }

    fn expense_list(message: Value) -> Vec<Expense> {
        let wire: Vec<ApiExpense> = match serde_json::from_value(message) {
            Ok(wire) => wire,
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("bad expense list payload: {}", e));
                return Vec::new();
            }
        };
        wire.into_iter()
            .filter_map(|api| match Expense::from_api(api) {
                Ok(expense) => Some(expense),
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &format!("dropping expense record: {}", e));
                    None
                }
            })
            .collect()
    }

    fn category_list(message: Value) -> Vec<Category> {
        let wire: Vec<ApiCategory> = match serde_json::from_value(message) {
            Ok(wire) => wire,
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("bad category list payload: {}", e));
                return Vec::new();
            }
        };
        wire.into_iter()
            .filter_map(|api| match Category::from_api(api) {
                Ok(category) => Some(category),
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &format!("dropping category record: {}", e));
                    None
                }
            })
            .collect()
    }

    /// All of the user's expenses for a period.
    pub async fn load_expenses(&self, period: ExpensePeriod) -> Vec<Expense> {
        let request = UserExpensesRequest {
            user: self.config.user_id.clone(),
            period,
        };
        let response = self
            .send_request(&self.expense_url("user_expenses"), HttpMethod::Post, &request)
            .await;
        if !response.is_success() {
            Logger::warn_with_component(COMPONENT, &format!("expense load failed ({})", response.status));
            return Vec::new();
        }
        Self::expense_list(response.message)
    }

    /// The user's expenses in one category for a period; `None` selects
    /// uncategorized expenses.
    pub async fn load_expenses_by_category(
        &self,
        category_id: Option<&str>,
        period: ExpensePeriod,
    ) -> Vec<Expense> {
        let request = CategoryExpensesRequest {
            user: self.config.user_id.clone(),
            category_id: category_id.map(str::to_string),
            period,
        };
        let response = self
            .send_request(&self.expense_url("category_expenses"), HttpMethod::Post, &request)
            .await;
        if !response.is_success() {
            Logger::warn_with_component(COMPONENT, &format!("category expense load failed ({})", response.status));
            return Vec::new();
        }
        Self::expense_list(response.message)
    }

    /// Expenses between two RFC 3339 dates, oldest first, for export.
    pub async fn load_expenses_by_date_range(&self, start_date: &str, end_date: &str) -> Vec<Expense> {
        let request = ExpenseRangeRequest {
            user: self.config.user_id.clone(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        };
        let response = self
            .send_request(&self.expense_url("export_expenses"), HttpMethod::Post, &request)
            .await;
        if !response.is_success() {
            Logger::warn_with_component(COMPONENT, &format!("range expense load failed ({})", response.status));
            return Vec::new();
        }
        Self::expense_list(response.message)
    }

    /// One expense by id.
    pub async fn get_expense(&self, expense_id: &str) -> Option<Expense> {
        let request = GetExpenseRequest {
            user: self.config.user_id.clone(),
            expense_id: expense_id.to_string(),
        };
        let response = self
            .send_request(&self.expense_url("get_expense"), HttpMethod::Post, &request)
            .await;
        if !response.is_success() {
            return None;
        }
        let wire: ApiExpense = serde_json::from_value(response.message).ok()?;
        Expense::from_api(wire).ok()
    }

    pub async fn create_expense(&self, expense: &Expense) -> ApiResponse {
        let wire = expense.to_api(&self.config.user_id);
        self.send_request(&self.expense_url("add_expense"), HttpMethod::Post, &wire)
            .await
    }

    pub async fn update_expense(&self, expense: &Expense) -> ApiResponse {
        let wire = expense.to_api(&self.config.user_id);
        self.send_request(&self.expense_url("update_expense"), HttpMethod::Patch, &wire)
            .await
    }

    pub async fn delete_expense(&self, expense_id: &str) -> ApiResponse {
        let request = DeleteExpenseRequest {
            user: self.config.user_id.clone(),
            expense_id: expense_id.to_string(),
        };
        self.send_request(&self.expense_url("remove_expense"), HttpMethod::Delete, &request)
            .await
    }

    /// Bulk-create expenses from an imported CSV file.
    pub async fn bulk_create_expenses(&self, payload: &ImportPayload) -> ApiResponse {
        let request = BulkImportRequest {
            user: self.config.user_id.clone(),
            expense_file: payload.file_data.clone(),
            has_heading: payload.has_heading,
        };
        self.send_request(&self.expense_url("bulk_create"), HttpMethod::Post, &request)
            .await
    }

    /// All of the user's categories.
    pub async fn load_categories(&self) -> Vec<Category> {
        let request = UserCategoriesRequest {
            user: self.config.user_id.clone(),
        };
        let response = self
            .send_request(&self.category_url("user_categories"), HttpMethod::Post, &request)
            .await;
        if !response.is_success() {
            Logger::warn_with_component(COMPONENT, &format!("category load failed ({})", response.status));
            return Vec::new();
        }
        Self::category_list(response.message)
    }

    /// One category by id.
    pub async fn get_category(&self, category_id: &str) -> Option<Category> {
        let request = GetCategoryRequest {
            user: self.config.user_id.clone(),
            category_id: category_id.to_string(),
        };
        let response = self
            .send_request(&self.category_url("get_category"), HttpMethod::Post, &request)
            .await;
        if !response.is_success() {
            return None;
        }
        let wire: ApiCategory = serde_json::from_value(response.message).ok()?;
        Category::from_api(wire).ok()
    }

    pub async fn create_category(&self, category: &Category) -> ApiResponse {
        let wire = category.to_api(&self.config.user_id);
        self.send_request(&self.category_url("add_category"), HttpMethod::Post, &wire)
            .await
    }

    pub async fn update_category(&self, category: &Category) -> ApiResponse {
        let wire = category.to_api(&self.config.user_id);
        self.send_request(&self.category_url("update_category"), HttpMethod::Patch, &wire)
            .await
    }

    pub async fn delete_category(&self, category_id: &str) -> ApiResponse {
        let request = DeleteCategoryRequest {
            user: self.config.user_id.clone(),
            category_id: category_id.to_string(),
        };
        self.send_request(&self.category_url("remove_category"), HttpMethod::Delete, &request)
            .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
