//! Field validation rules.
//!
//! A field is validated against a sequence of rules; the result is the AND
//! of every rule. Rules never mutate the input and never panic on malformed
//! text: an unparseable number or date simply fails the comparison.

use crate::services::date_utils;

/// Earliest accepted spend date, 2020-01-01 UTC as epoch milliseconds.
pub const MIN_SPEND_DATE_MS: i64 = 1_577_836_800_000;
/// Latest accepted spend date, 2050-12-31 UTC as epoch milliseconds.
pub const MAX_SPEND_DATE_MS: i64 = 2_556_057_600_000;

/// One validation rule. Length rules apply to the trimmed value; value and
/// date bounds are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    MinValue(f64),
    MaxValue(f64),
    /// Inclusive lower bound in epoch milliseconds
    MinDate(i64),
    /// Inclusive upper bound in epoch milliseconds
    MaxDate(i64),
    /// At most 2 digits after the decimal point; whole amounts pass
    CurrencyFormat,
}

/// Evaluate `value` against every rule. Pure and deterministic.
pub fn validate(value: &str, rules: &[Rule]) -> bool {
    rules.iter().all(|rule| check(value, rule))
}

fn check(value: &str, rule: &Rule) -> bool {
    match rule {
        Rule::Required => !value.trim().is_empty(),
        Rule::MinLength(min) => value.trim().len() >= *min,
        Rule::MaxLength(max) => value.trim().len() <= *max,
        Rule::MinValue(min) => parse_number(value).map(|v| v >= *min).unwrap_or(false),
        Rule::MaxValue(max) => parse_number(value).map(|v| v <= *max).unwrap_or(false),
        Rule::MinDate(min_ms) => date_utils::parse_date_ms(value)
            .map(|ms| ms >= *min_ms)
            .unwrap_or(false),
        Rule::MaxDate(max_ms) => date_utils::parse_date_ms(value)
            .map(|ms| ms <= *max_ms)
            .unwrap_or(false),
        Rule::CurrencyFormat => match value.split('.').nth(1) {
            Some(fraction) => fraction.len() <= 2,
            None => true,
        },
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Rules for the category name input.
pub fn category_name_rules() -> Vec<Rule> {
    vec![Rule::Required, Rule::MinLength(2), Rule::MaxLength(50)]
}

/// Rules for the category monthly budget input.
pub fn category_budget_rules() -> Vec<Rule> {
    vec![
        Rule::Required,
        Rule::MinValue(0.01),
        Rule::MaxLength(10),
        Rule::CurrencyFormat,
    ]
}

/// Rules for the expense vendor input.
pub fn expense_vendor_rules() -> Vec<Rule> {
    vec![Rule::Required, Rule::MinLength(2), Rule::MaxLength(100)]
}

/// Rules for the expense description textarea. The field is optional, so
/// there is no Required rule; a blank untouched field stays valid via the
/// form preset.
pub fn expense_description_rules() -> Vec<Rule> {
    vec![Rule::MinLength(2), Rule::MaxLength(250)]
}

/// Rules for the expense amount input.
pub fn expense_amount_rules() -> Vec<Rule> {
    vec![
        Rule::Required,
        Rule::MinValue(0.01),
        Rule::MaxLength(10),
        Rule::CurrencyFormat,
    ]
}

/// Rules for spend date and export range date inputs.
pub fn spend_date_rules() -> Vec<Rule> {
    vec![
        Rule::Required,
        Rule::MinDate(MIN_SPEND_DATE_MS),
        Rule::MaxDate(MAX_SPEND_DATE_MS),
    ]
}
