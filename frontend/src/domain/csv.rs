//! CSV export codec and import payload.
//!
//! Export writes the fixed dialect the server's importer understands: a
//! header line, then one trailing-comma row per expense. The amount column
//! carries raw transaction polarity (withdrawals negated) rather than the
//! category-relative sign the budget graph uses; the export reflects what
//! happened on the account, not budget-relative direction.
//!
//! Import stays unparsed on this side: the picked file travels to the
//! server as a data URL plus a header-row flag.

use shared::{Expense, ExpenseKind};

use crate::error::FormatError;
use crate::services::date_utils;

/// First line of every export file.
pub const CSV_HEADER: &str = "Date,Vendor,Amount,Type,Category,";
/// Download name for the export file.
pub const EXPORT_FILE_NAME: &str = "expenses.csv";
/// MIME type of the export blob.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Body of a bulk-import request before the user id is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPayload {
    /// The picked file read as a data URL
    pub file_data: String,
    /// Whether the first row of the file is a heading to skip
    pub has_heading: bool,
}

/// Format expenses as CSV lines, header first.
///
/// All-or-nothing: the first record missing a date, vendor, or category
/// name fails the whole export, so a partial file never reaches the user.
pub fn to_csv_lines(expenses: &[Expense]) -> Result<Vec<String>, FormatError> {
    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for (row, expense) in expenses.iter().enumerate() {
        let date = date_utils::date_part(&expense.spend_date);
        if date.is_empty() {
            return Err(FormatError::MissingField { row, field: "date" });
        }
        if expense.vendor.trim().is_empty() {
            return Err(FormatError::MissingField { row, field: "vendor" });
        }
        let category = expense
            .category_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or(FormatError::MissingField {
                row,
                field: "category",
            })?;

        let signed_amount = match expense.kind {
            ExpenseKind::Deposit => expense.amount,
            ExpenseKind::Withdrawal => -expense.amount,
        };

        lines.push(format!(
            "{},{},{},{},{},",
            date, expense.vendor, signed_amount, expense.kind, category
        ));
    }

    Ok(lines)
}

/// Join export lines into the file body.
pub fn csv_file_contents(lines: &[String]) -> String {
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(vendor: &str, amount: f64, kind: ExpenseKind, category: Option<&str>) -> Expense {
        Expense {
            id: Some("e-1".to_string()),
            vendor: vendor.to_string(),
            description: String::new(),
            amount,
            kind,
            spend_date: "2024-03-01T09:30:00.000Z".to_string(),
            category_id: category.map(|_| "c-1".to_string()),
            category_name: category.map(str::to_string),
        }
    }

    #[test]
    fn test_withdrawal_line_is_negated() {
        let expenses = [expense("Acme", 42.0, ExpenseKind::Withdrawal, Some("Food"))];

        let lines = to_csv_lines(&expenses).unwrap();

        assert_eq!(lines[0], "Date,Vendor,Amount,Type,Category,");
        assert_eq!(lines[1], "2024-03-01,Acme,-42,Withdrawal,Food,");
    }

    #[test]
    fn test_deposit_keeps_raw_amount() {
        let expenses = [expense("Payroll", 1200.5, ExpenseKind::Deposit, Some("Salary"))];

        let lines = to_csv_lines(&expenses).unwrap();

        assert_eq!(lines[1], "2024-03-01,Payroll,1200.5,Deposit,Salary,");
    }

    #[test]
    fn test_missing_category_fails_whole_export() {
        let expenses = [
            expense("Acme", 42.0, ExpenseKind::Withdrawal, Some("Food")),
            expense("NoCat", 7.0, ExpenseKind::Withdrawal, None),
        ];

        let err = to_csv_lines(&expenses).unwrap_err();

        assert_eq!(
            err,
            FormatError::MissingField {
                row: 1,
                field: "category"
            }
        );
    }

    #[test]
    fn test_blank_vendor_fails() {
        let expenses = [expense("  ", 42.0, ExpenseKind::Withdrawal, Some("Food"))];

        let err = to_csv_lines(&expenses).unwrap_err();

        assert_eq!(
            err,
            FormatError::MissingField {
                row: 0,
                field: "vendor"
            }
        );
    }

    #[test]
    fn test_empty_date_fails() {
        let mut bad = expense("Acme", 42.0, ExpenseKind::Withdrawal, Some("Food"));
        bad.spend_date = String::new();

        let err = to_csv_lines(&[bad]).unwrap_err();

        assert_eq!(err, FormatError::MissingField { row: 0, field: "date" });
    }

    #[test]
    fn test_empty_input_yields_header_only() {
        let lines = to_csv_lines(&[]).unwrap();

        assert_eq!(lines, vec![CSV_HEADER.to_string()]);
    }

    #[test]
    fn test_file_contents_join_with_newlines() {
        let expenses = [
            expense("Acme", 42.0, ExpenseKind::Withdrawal, Some("Food")),
            expense("Payroll", 10.0, ExpenseKind::Deposit, Some("Salary")),
        ];

        let contents = csv_file_contents(&to_csv_lines(&expenses).unwrap());

        assert_eq!(
            contents,
            "Date,Vendor,Amount,Type,Category,\n\
             2024-03-01,Acme,-42,Withdrawal,Food,\n\
             2024-03-01,Payroll,10,Deposit,Salary,"
        );
    }
}
