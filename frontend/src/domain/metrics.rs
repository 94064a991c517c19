//! Derived budget metrics for the monthly progress graph.
//!
//! Sign convention: a deposit into an income category and a withdrawal
//! against an expense category are the expected postings and count positive
//! toward their bucket; the opposite-kind postings (refunds, income
//! corrections) flip sign. An expense with no category counts as non-income.

use std::collections::HashSet;

use shared::{Category, CategoryKind, Expense, ExpenseKind};

/// Minimum bar width for the aggregate "total" rows, so a sliver of
/// progress stays visible even at 0-1%. Per-category bars use no floor.
pub const TOTAL_BAR_MIN_PERCENT: u32 = 2;

/// Progress of spend against one budget figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetProgress {
    /// 0..=100, floored, clamped below at the caller's minimum
    pub percent: u32,
    pub over_budget: bool,
}

/// Signed spend total plus its budget progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpendSummary {
    pub total: f64,
    pub progress: BudgetProgress,
}

/// Current-month totals, one magnitude per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthTotals {
    pub expense_total: f64,
    pub income_total: f64,
}

/// Budget ceilings split by category kind, plus the income id set the sign
/// convention needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BudgetTotals {
    pub expense_budget: f64,
    pub income_budget: f64,
    pub income_category_ids: HashSet<String>,
}

fn is_income(expense: &Expense, income_ids: &HashSet<String>) -> bool {
    expense
        .category_id
        .as_ref()
        .map(|id| income_ids.contains(id))
        .unwrap_or(false)
}

fn signed_amount(expense: &Expense, income_ids: &HashSet<String>) -> f64 {
    let sign = match (is_income(expense, income_ids), expense.kind) {
        (true, ExpenseKind::Deposit) => 1.0,
        (true, ExpenseKind::Withdrawal) => -1.0,
        (false, ExpenseKind::Deposit) => -1.0,
        (false, ExpenseKind::Withdrawal) => 1.0,
    };
    sign * expense.amount
}

/// Signed spend total for one category's expenses.
pub fn category_spend(expenses: &[Expense], income_ids: &HashSet<String>) -> f64 {
    expenses
        .iter()
        .map(|expense| signed_amount(expense, income_ids))
        .sum()
}

/// Current-month totals across all expenses. The income and expense buckets
/// are summed separately and displayed as magnitudes.
pub fn month_totals(expenses: &[Expense], income_ids: &HashSet<String>) -> MonthTotals {
    let mut expense_bucket = 0.0;
    let mut income_bucket = 0.0;
    for expense in expenses {
        let amount = signed_amount(expense, income_ids);
        if is_income(expense, income_ids) {
            income_bucket += amount;
        } else {
            expense_bucket += amount;
        }
    }
    MonthTotals {
        expense_total: expense_bucket.abs(),
        income_total: income_bucket.abs(),
    }
}

/// Spend as a floored percent of budget.
///
/// A zero or negative budget reports 0% and not-over for any total, rather
/// than letting Infinity or NaN reach the progress bar. Meeting the budget
/// exactly counts as over.
pub fn percent_of_budget(total_spent: f64, budget: f64, min_percent: u32) -> BudgetProgress {
    if budget <= 0.0 {
        return BudgetProgress {
            percent: 0,
            over_budget: false,
        };
    }
    if total_spent >= budget {
        return BudgetProgress {
            percent: 100,
            over_budget: true,
        };
    }
    let raw = ((total_spent / budget) * 100.0).floor();
    let percent = if raw < min_percent as f64 {
        min_percent
    } else {
        raw as u32
    };
    BudgetProgress {
        percent,
        over_budget: false,
    }
}

/// Total one record list against one budget figure.
pub fn aggregate(
    expenses: &[Expense],
    income_ids: &HashSet<String>,
    budget: f64,
    min_percent: u32,
) -> SpendSummary {
    let total = category_spend(expenses, income_ids);
    SpendSummary {
        total,
        progress: percent_of_budget(total, budget, min_percent),
    }
}

/// Split category budgets into income and expense ceilings and collect the
/// income category ids.
pub fn budget_totals(categories: &[Category]) -> BudgetTotals {
    let mut totals = BudgetTotals::default();
    for category in categories {
        match category.kind {
            CategoryKind::Income => {
                totals.income_budget += category.budget;
                if let Some(id) = &category.id {
                    totals.income_category_ids.insert(id.clone());
                }
            }
            CategoryKind::Expense => {
                totals.expense_budget += category.budget;
            }
        }
    }
    totals.expense_budget = totals.expense_budget.abs();
    totals.income_budget = totals.income_budget.abs();
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: f64, kind: ExpenseKind, category_id: Option<&str>) -> Expense {
        Expense {
            id: Some("e-1".to_string()),
            vendor: "Acme".to_string(),
            description: String::new(),
            amount,
            kind,
            spend_date: "2024-03-01T00:00:00.000Z".to_string(),
            category_id: category_id.map(str::to_string),
            category_name: Some("Food".to_string()),
        }
    }

    fn income_ids(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_withdrawal_against_expense_category_counts_positive() {
        let expenses = [expense(100.0, ExpenseKind::Withdrawal, Some("expenseCat"))];

        let summary = aggregate(&expenses, &HashSet::new(), 200.0, 0);

        assert_eq!(summary.total, 100.0);
        assert_eq!(summary.progress.percent, 50);
        assert!(!summary.progress.over_budget);
    }

    #[test]
    fn test_meeting_budget_is_over_budget() {
        let expenses = [expense(250.0, ExpenseKind::Withdrawal, Some("expenseCat"))];

        let summary = aggregate(&expenses, &HashSet::new(), 200.0, 0);

        assert_eq!(summary.progress.percent, 100);
        assert!(summary.progress.over_budget);

        let exact = percent_of_budget(200.0, 200.0, 0);
        assert_eq!(exact.percent, 100);
        assert!(exact.over_budget);
    }

    #[test]
    fn test_zero_budget_never_produces_nan() {
        let progress = percent_of_budget(500.0, 0.0, 0);
        assert_eq!(progress.percent, 0);
        assert!(!progress.over_budget);

        let negative = percent_of_budget(500.0, -10.0, TOTAL_BAR_MIN_PERCENT);
        assert_eq!(negative.percent, 0);
        assert!(!negative.over_budget);
    }

    #[test]
    fn test_percent_floors_and_clamps() {
        assert_eq!(percent_of_budget(150.0, 200.0, 0).percent, 75);
        // 199/200 floors down, not rounds
        assert_eq!(percent_of_budget(199.0, 200.0, 0).percent, 99);
        // Refund-heavy category: negative total clamps to the floor
        assert_eq!(percent_of_budget(-50.0, 200.0, 0).percent, 0);
        // Aggregate view keeps a visible sliver
        assert_eq!(percent_of_budget(1.0, 200.0, TOTAL_BAR_MIN_PERCENT).percent, 2);
        assert_eq!(percent_of_budget(-50.0, 200.0, TOTAL_BAR_MIN_PERCENT).percent, 2);
    }

    #[test]
    fn test_income_category_flips_sign() {
        let ids = income_ids(&["salary"]);
        let expenses = [
            expense(1000.0, ExpenseKind::Deposit, Some("salary")),
            expense(200.0, ExpenseKind::Withdrawal, Some("salary")),
        ];

        assert_eq!(category_spend(&expenses, &ids), 800.0);
    }

    #[test]
    fn test_deposit_into_expense_category_is_a_refund() {
        let expenses = [
            expense(100.0, ExpenseKind::Withdrawal, Some("food")),
            expense(30.0, ExpenseKind::Deposit, Some("food")),
        ];

        assert_eq!(category_spend(&expenses, &HashSet::new()), 70.0);
    }

    #[test]
    fn test_uncategorized_counts_as_expense() {
        let expenses = [expense(40.0, ExpenseKind::Withdrawal, None)];

        assert_eq!(category_spend(&expenses, &income_ids(&["salary"])), 40.0);
    }

    #[test]
    fn test_month_totals_keep_buckets_separate() {
        let ids = income_ids(&["salary"]);
        let expenses = [
            expense(1000.0, ExpenseKind::Deposit, Some("salary")),
            expense(100.0, ExpenseKind::Withdrawal, Some("food")),
            expense(30.0, ExpenseKind::Deposit, Some("food")),
        ];

        let totals = month_totals(&expenses, &ids);

        assert_eq!(totals.income_total, 1000.0);
        assert_eq!(totals.expense_total, 70.0);
    }

    #[test]
    fn test_month_totals_are_magnitudes() {
        // Refunds exceeding spend leave a negative bucket; display wants
        // the magnitude.
        let expenses = [expense(30.0, ExpenseKind::Deposit, Some("food"))];

        let totals = month_totals(&expenses, &HashSet::new());

        assert_eq!(totals.expense_total, 30.0);
    }

    #[test]
    fn test_budget_totals_split_by_kind() {
        let categories = [
            Category {
                id: Some("salary".to_string()),
                name: "Salary".to_string(),
                display_color: "#98fb98".to_string(),
                budget: 3000.0,
                kind: CategoryKind::Income,
            },
            Category {
                id: Some("food".to_string()),
                name: "Food".to_string(),
                display_color: "#d87093".to_string(),
                budget: 400.0,
                kind: CategoryKind::Expense,
            },
            Category {
                id: Some("rent".to_string()),
                name: "Rent".to_string(),
                display_color: "#aabbcc".to_string(),
                budget: 1200.0,
                kind: CategoryKind::Expense,
            },
        ];

        let totals = budget_totals(&categories);

        assert_eq!(totals.income_budget, 3000.0);
        assert_eq!(totals.expense_budget, 1600.0);
        assert_eq!(totals.income_category_ids, income_ids(&["salary"]));
    }
}
