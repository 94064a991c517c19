//! Expense list ordering.
//!
//! One comparator per column; direction comes from an explicit `ascending`
//! flag applied with `Ordering::reverse`, never by swapping comparator
//! arguments.

use std::cmp::Ordering;

use shared::Expense;

use crate::services::date_utils;

/// Column an expense list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Amount,
    Vendor,
    Category,
}

/// Sort in place by `key` in the given direction.
pub fn sort_expenses(expenses: &mut [Expense], key: SortKey, ascending: bool) {
    expenses.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn compare(a: &Expense, b: &Expense, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => sort_date_ms(a).cmp(&sort_date_ms(b)),
        SortKey::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
        SortKey::Vendor => a.vendor.to_lowercase().cmp(&b.vendor.to_lowercase()),
        SortKey::Category => sort_category(a).cmp(&sort_category(b)),
    }
}

// Unparseable dates sort before everything so they surface at one end
// instead of scattering.
fn sort_date_ms(expense: &Expense) -> i64 {
    date_utils::parse_date_ms(&expense.spend_date).unwrap_or(i64::MIN)
}

fn sort_category(expense: &Expense) -> String {
    expense
        .category_name
        .as_deref()
        .unwrap_or_default()
        .to_lowercase()
}
