//! Shared data model for the expense tracker.
//!
//! Types in this crate travel between the frontend and the REST API. App-side
//! models (`Expense`, `Category`) carry parsed, typed fields; the `Api*` wire
//! types mirror what the server actually sends, with money as decimal text.
//! Mapping between the two lives here so both directions stay in one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an expense entry before any category-relative sign
/// adjustment. Amounts are always stored positive; this enum carries the
/// polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseKind {
    /// Money put in (income posting, refund against a category)
    Deposit,
    /// Money taken out (the ordinary spend case)
    Withdrawal,
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseKind::Deposit => write!(f, "Deposit"),
            ExpenseKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// Classification of a category. Income categories flip the sign convention
/// used when aggregating spend against a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    Income,
    Expense,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Income => write!(f, "Income"),
            CategoryKind::Expense => write!(f, "Expense"),
        }
    }
}

/// Which slice of a user's expenses a list request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpensePeriod {
    /// Current calendar month only
    Current,
    /// Everything on record
    All,
}

/// An expense as the app works with it.
///
/// `amount` is always positive; rendering and aggregation derive any sign
/// from `kind` and the category classification. `spend_date` is an RFC 3339
/// timestamp string, kept as text because the frontend only ever reformats
/// or compares it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Server-assigned id; `None` for a draft that has not been saved yet
    pub id: Option<String>,
    pub vendor: String,
    pub description: String,
    pub amount: f64,
    pub kind: ExpenseKind,
    /// RFC 3339 timestamp of when the money moved
    pub spend_date: String,
    /// Owning category id; `None` means uncategorized
    pub category_id: Option<String>,
    /// Category display name as hydrated from the API
    pub category_name: Option<String>,
}

/// A budget category as the app works with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned id; `None` for a draft that has not been saved yet
    pub id: Option<String>,
    pub name: String,
    /// 7-char hex color code including the leading '#'
    pub display_color: String,
    /// Monthly budget ceiling for this category
    pub budget: f64,
    pub kind: CategoryKind,
}

/// Expense record in the shape the API sends and accepts.
///
/// Money travels as decimal text. Server-managed fields (`id`,
/// `date_created`) only appear on responses and are never sent back on
/// create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiExpense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub vendor: String,
    pub description: String,
    /// Decimal text, e.g. "12.50"
    pub amount: String,
    pub kind: ExpenseKind,
    pub spend_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
}

/// Category record in the shape the API sends and accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub name: String,
    pub display_color: String,
    /// Decimal text, e.g. "400"
    pub budget: String,
    pub kind: CategoryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
}

/// Request for a user's expenses over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserExpensesRequest {
    pub user: String,
    pub period: ExpensePeriod,
}

/// Request for a user's expenses in one category over a period.
/// `category_id: None` selects uncategorized expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExpensesRequest {
    pub user: String,
    pub category_id: Option<String>,
    pub period: ExpensePeriod,
}

/// Request for a single expense by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetExpenseRequest {
    pub user: String,
    pub expense_id: String,
}

/// Request for expenses between two dates (both RFC 3339), used by export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRangeRequest {
    pub user: String,
    pub start_date: String,
    pub end_date: String,
}

/// Request to delete one expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteExpenseRequest {
    pub user: String,
    pub expense_id: String,
}

/// Request to bulk-create expenses from an imported file.
///
/// `expense_file` is the picked file encoded as a data URL; parsing the CSV
/// fields out of it is the server's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkImportRequest {
    pub user: String,
    pub expense_file: String,
    pub has_heading: bool,
}

/// Request for all of a user's categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCategoriesRequest {
    pub user: String,
}

/// Request for a single category by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCategoryRequest {
    pub user: String,
    pub category_id: String,
}

/// Request to delete one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteCategoryRequest {
    pub user: String,
    pub category_id: String,
}

/// Failure converting a wire record into an app model.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The decimal text in a money field did not parse
    BadAmount(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::BadAmount(raw) => {
                write!(f, "money field is not decimal text: {:?}", raw)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

fn parse_money(raw: &str) -> Result<f64, ConvertError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConvertError::BadAmount(raw.to_string()))
}

impl Expense {
    /// Hydrate an app expense from a wire record.
    ///
    /// Uncategorized records come back with no category; they hydrate with
    /// the "Uncategorized" display name so every downstream consumer (CSV
    /// export included) sees a name.
    pub fn from_api(api: ApiExpense) -> Result<Self, ConvertError> {
        let amount = parse_money(&api.amount)?;
        Ok(Expense {
            id: api.id.or(api.expense_id),
            vendor: api.vendor,
            description: api.description,
            amount,
            kind: api.kind,
            spend_date: api.spend_date,
            category_id: api.category,
            category_name: api.category_name.or_else(|| Some("Uncategorized".to_string())),
        })
    }

    /// Convert to the wire shape for create/update requests.
    ///
    /// Server-managed fields stay unset; `category_name` is display-only and
    /// never sent back.
    pub fn to_api(&self, user: &str) -> ApiExpense {
        ApiExpense {
            id: None,
            expense_id: self.id.clone(),
            user: Some(user.to_string()),
            vendor: self.vendor.clone(),
            description: self.description.clone(),
            amount: format!("{}", self.amount),
            kind: self.kind,
            spend_date: self.spend_date.clone(),
            category: self.category_id.clone(),
            category_name: None,
            date_created: None,
        }
    }
}

impl Category {
    /// Hydrate an app category from a wire record.
    pub fn from_api(api: ApiCategory) -> Result<Self, ConvertError> {
        let budget = parse_money(&api.budget)?;
        Ok(Category {
            id: api.id.or(api.category_id),
            name: api.name,
            display_color: api.display_color,
            budget,
            kind: api.kind,
        })
    }

    /// Convert to the wire shape for create/update requests.
    pub fn to_api(&self, user: &str) -> ApiCategory {
        ApiCategory {
            id: None,
            category_id: self.id.clone(),
            user: Some(user.to_string()),
            name: self.name.clone(),
            display_color: self.display_color.clone(),
            budget: format!("{}", self.budget),
            kind: self.kind,
            date_created: None,
        }
    }
}
