//! Form state management.
//!
//! Each open modal owns one `FormState`, created fresh from a preset and
//! discarded on close; no two forms ever share live state. Fields revalidate
//! on every edit and the whole-form flag is the AND of the fields.

use std::cell::Cell;
use std::rc::Rc;

use crate::forms::validators::{self, Rule};

/// Validation state of a single input field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub name: String,
    pub value: String,
    pub is_valid: bool,
}

/// Which blank form a `FormState` starts from.
///
/// Required fields with no default value start invalid, which is what keeps
/// a freshly opened form unsubmittable until the user fills them in.
/// Optional (or empty-OK) fields start valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPreset {
    /// Add/edit expense: vendor, description, amount, category, spend-date
    ExpenseEntry,
    /// Add/edit category: name, display-color, budget
    CategoryEntry,
    /// Export date range: start-date, end-date
    DateRangeExport,
}

struct FieldDef {
    name: &'static str,
    rules: Vec<Rule>,
    starts_valid: bool,
}

impl FormPreset {
    fn field_defs(self) -> Vec<FieldDef> {
        match self {
            FormPreset::ExpenseEntry => vec![
                FieldDef {
                    name: "vendor",
                    rules: validators::expense_vendor_rules(),
                    starts_valid: false,
                },
                FieldDef {
                    name: "description",
                    rules: validators::expense_description_rules(),
                    starts_valid: true,
                },
                FieldDef {
                    name: "amount",
                    rules: validators::expense_amount_rules(),
                    starts_valid: true,
                },
                FieldDef {
                    name: "category",
                    rules: Vec::new(),
                    starts_valid: true,
                },
                FieldDef {
                    name: "spend-date",
                    rules: validators::spend_date_rules(),
                    starts_valid: true,
                },
            ],
            FormPreset::CategoryEntry => vec![
                FieldDef {
                    name: "name",
                    rules: validators::category_name_rules(),
                    starts_valid: false,
                },
                FieldDef {
                    name: "display-color",
                    rules: Vec::new(),
                    starts_valid: true,
                },
                FieldDef {
                    name: "budget",
                    rules: validators::category_budget_rules(),
                    starts_valid: true,
                },
            ],
            FormPreset::DateRangeExport => vec![
                FieldDef {
                    name: "start-date",
                    rules: validators::spend_date_rules(),
                    starts_valid: true,
                },
                FieldDef {
                    name: "end-date",
                    rules: validators::spend_date_rules(),
                    starts_valid: true,
                },
            ],
        }
    }

    fn rules_for(self, name: &str) -> Option<Vec<Rule>> {
        self.field_defs()
            .into_iter()
            .find(|def| def.name == name)
            .map(|def| def.rules)
    }
}

/// State of one open form: ordered fields plus the aggregate validity flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    preset: FormPreset,
    fields: Vec<FieldState>,
    is_valid: bool,
}

impl FormState {
    /// Fresh copy of the preset's blank state.
    pub fn new(preset: FormPreset) -> Self {
        let fields = preset
            .field_defs()
            .into_iter()
            .map(|def| FieldState {
                name: def.name.to_string(),
                value: String::new(),
                is_valid: def.starts_valid,
            })
            .collect();
        let mut state = FormState {
            preset,
            fields,
            is_valid: false,
        };
        state.recompute();
        state
    }

    pub fn preset(&self) -> FormPreset {
        self.preset
    }

    /// Record an edit: revalidate the field against its rules and recompute
    /// the whole-form flag. Returns the field's new validity; an unknown
    /// field name is a no-op returning false.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let Some(rules) = self.preset.rules_for(name) else {
            return false;
        };
        let is_valid = validators::validate(value, &rules);
        if let Some(field) = self.fields.iter_mut().find(|field| field.name == name) {
            field.value = value.to_string();
            field.is_valid = is_valid;
        }
        self.recompute();
        is_valid
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Unknown fields report invalid.
    pub fn is_field_valid(&self, name: &str) -> bool {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.is_valid)
            .unwrap_or(false)
    }

    /// AND of every tracked field.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    /// Reset to the preset's blank state.
    pub fn clear(&mut self) {
        *self = FormState::new(self.preset);
    }

    fn recompute(&mut self) {
        self.is_valid = self.fields.iter().all(|field| field.is_valid);
    }
}

/// Guard against a save response landing on a form that has since been
/// closed or cleared.
///
/// Mint a token before awaiting the request; after the await, apply the
/// response only if the token is still current. Closing or clearing the
/// form calls `invalidate`, which strands every outstanding token.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    epoch: Rc<Cell<u64>>,
}

/// Proof of which form generation a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken {
    epoch: u64,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> SubmitToken {
        SubmitToken {
            epoch: self.epoch.get(),
        }
    }

    pub fn invalidate(&self) {
        self.epoch.set(self.epoch.get() + 1);
    }

    pub fn is_current(&self, token: SubmitToken) -> bool {
        token.epoch == self.epoch.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_preset_starts_invalid() {
        let form = FormState::new(FormPreset::ExpenseEntry);

        assert!(!form.is_valid());
        assert!(!form.is_field_valid("vendor"));
        assert!(form.is_field_valid("description"));
        assert!(form.is_field_valid("amount"));
        assert!(form.is_field_valid("spend-date"));
    }

    #[test]
    fn test_expense_form_becomes_valid_with_vendor() {
        let mut form = FormState::new(FormPreset::ExpenseEntry);

        assert!(!form.set_field("vendor", "A"));
        assert!(!form.is_valid());

        assert!(form.set_field("vendor", "Acme"));
        assert!(form.is_valid());
    }

    #[test]
    fn test_invalid_edit_invalidates_form() {
        let mut form = FormState::new(FormPreset::ExpenseEntry);
        form.set_field("vendor", "Acme");
        assert!(form.is_valid());

        form.set_field("amount", "12.345");
        assert!(!form.is_valid());
        assert!(!form.is_field_valid("amount"));

        form.set_field("amount", "12.34");
        assert!(form.is_valid());
    }

    #[test]
    fn test_category_preset_requires_name() {
        let mut form = FormState::new(FormPreset::CategoryEntry);

        assert!(!form.is_valid());
        form.set_field("name", "Groceries");
        assert!(form.is_valid());
    }

    #[test]
    fn test_export_preset_is_submittable_immediately() {
        let form = FormState::new(FormPreset::DateRangeExport);

        assert!(form.is_valid());
    }

    #[test]
    fn test_clear_restores_blank_preset() {
        let mut form = FormState::new(FormPreset::ExpenseEntry);
        form.set_field("vendor", "Acme");
        form.set_field("amount", "9.99");
        assert!(form.is_valid());

        form.clear();

        assert_eq!(form, FormState::new(FormPreset::ExpenseEntry));
        assert!(!form.is_valid());
        assert_eq!(form.field_value("vendor"), Some(""));
    }

    #[test]
    fn test_unknown_field_is_a_no_op() {
        let mut form = FormState::new(FormPreset::ExpenseEntry);

        assert!(!form.set_field("nonsense", "value"));
        assert!(!form.is_field_valid("nonsense"));
        assert_eq!(form.field_value("nonsense"), None);
    }

    #[test]
    fn test_forms_do_not_share_state() {
        let mut first = FormState::new(FormPreset::ExpenseEntry);
        first.set_field("vendor", "Acme");

        let second = FormState::new(FormPreset::ExpenseEntry);
        assert_eq!(second.field_value("vendor"), Some(""));
    }

    #[test]
    fn test_submit_guard_strands_old_tokens() {
        let guard = SubmitGuard::new();
        let token = guard.token();
        assert!(guard.is_current(token));

        guard.invalidate();

        assert!(!guard.is_current(token));
        assert!(guard.is_current(guard.token()));
    }
}
