//! The in-progress transaction bound to the entry form.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::{StoreError, StoreResult};

use super::{
    category::DEFAULT_CATEGORY,
    transaction::{Transaction, TransactionId, TransactionKind},
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw form values. Nothing is checked until the draft is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub date: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self::with_defaults(TransactionKind::Income, DEFAULT_CATEGORY)
    }
}

/// Form field addressed by [`Draft::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    Amount,
    Type,
    Category,
}

impl FromStr for DraftField {
    type Err = StoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "date" => Ok(DraftField::Date),
            "amount" => Ok(DraftField::Amount),
            "type" => Ok(DraftField::Type),
            "category" => Ok(DraftField::Category),
            other => Err(StoreError::Validation(format!("unknown form field `{other}`"))),
        }
    }
}

/// Whether the draft creates a new entry or overwrites an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftMode {
    #[default]
    Creating,
    Editing(TransactionId),
}

impl DraftMode {
    pub fn edit_target(&self) -> Option<TransactionId> {
        match self {
            DraftMode::Creating => None,
            DraftMode::Editing(id) => Some(*id),
        }
    }
}

/// Draft values that passed validation and can become a [`Transaction`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
}

impl ValidatedDraft {
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction::new(id, self.date, self.amount, self.kind, self.category)
    }

    /// Overwrites every field of `target` except its id.
    pub fn apply_to(self, target: &mut Transaction) {
        target.date = self.date;
        target.amount = self.amount;
        target.kind = self.kind;
        target.category = self.category;
    }
}

impl Draft {
    pub fn with_defaults(kind: TransactionKind, category: impl Into<String>) -> Self {
        Self {
            date: String::new(),
            amount: String::new(),
            kind: kind.as_str().to_string(),
            category: category.into(),
        }
    }

    /// Copies a stored transaction into form values.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            date: transaction.date.format(DATE_FORMAT).to_string(),
            amount: transaction.amount.to_string(),
            kind: transaction.kind.as_str().to_string(),
            category: transaction.category.clone(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Date => self.date = value,
            DraftField::Amount => self.amount = value,
            DraftField::Type => self.kind = value,
            DraftField::Category => self.category = value,
        }
    }

    /// Mirrors the form's submit button: enabled once date and amount are filled.
    pub fn is_committable(&self) -> bool {
        !self.date.trim().is_empty() && !self.amount.trim().is_empty()
    }

    pub fn validate(&self) -> StoreResult<ValidatedDraft> {
        let date = self.date.trim();
        let amount = self.amount.trim();
        if date.is_empty() {
            return Err(StoreError::Validation("date is required".into()));
        }
        if amount.is_empty() {
            return Err(StoreError::Validation("amount is required".into()));
        }

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|err| {
            StoreError::Validation(format!("date `{date}` is not an ISO-8601 date: {err}"))
        })?;
        let amount = parse_amount(amount)?;
        let kind = self.kind.parse::<TransactionKind>()?;

        Ok(ValidatedDraft {
            date,
            amount,
            kind,
            category: self.category.clone(),
        })
    }
}

fn parse_amount(raw: &str) -> StoreResult<f64> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| StoreError::Validation(format!("amount `{raw}` is not a number")))?;
    check_amount(value)
}

/// Rejects amounts a committed transaction may not hold and folds `-0` into `0`.
pub(crate) fn check_amount(value: f64) -> StoreResult<f64> {
    if !value.is_finite() {
        return Err(StoreError::Validation(format!(
            "amount `{value}` is not a finite number"
        )));
    }
    if value < 0.0 {
        return Err(StoreError::Validation(format!(
            "amount `{value}` must not be negative"
        )));
    }
    Ok(if value == 0.0 { 0.0 } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(date: &str, amount: &str, kind: &str, category: &str) -> Draft {
        Draft {
            date: date.into(),
            amount: amount.into(),
            kind: kind.into(),
            category: category.into(),
        }
    }

    #[test]
    fn default_draft_matches_blank_form() {
        let draft = Draft::default();
        assert_eq!(draft.date, "");
        assert_eq!(draft.amount, "");
        assert_eq!(draft.kind, "income");
        assert_eq!(draft.category, "Salary");
        assert!(!draft.is_committable());
    }

    #[test]
    fn field_names_follow_form_inputs() {
        assert_eq!("date".parse::<DraftField>().unwrap(), DraftField::Date);
        assert_eq!("type".parse::<DraftField>().unwrap(), DraftField::Type);
        assert!("memo".parse::<DraftField>().is_err());
    }

    #[test]
    fn set_accepts_any_string() {
        let mut draft = Draft::default();
        draft.set(DraftField::Amount, "not a number");
        draft.set(DraftField::Type, "gift");
        assert_eq!(draft.amount, "not a number");
        assert_eq!(draft.kind, "gift");
    }

    #[test]
    fn zero_amount_is_committable() {
        let draft = filled("2023-02-01", "0", "expense", "Bills");
        assert!(draft.is_committable());
        let valid = draft.validate().expect("zero is allowed");
        assert_eq!(valid.amount, 0.0);
        assert_eq!(valid.kind, TransactionKind::Expense);
    }

    #[test]
    fn negative_zero_amount_is_normalized() {
        let valid = filled("2023-02-01", "-0", "expense", "Bills")
            .validate()
            .unwrap();
        assert!(valid.amount.is_sign_positive());
        assert_eq!(serde_json::to_string(&valid.amount).unwrap(), "0.0");
    }

    #[test]
    fn category_is_kept_verbatim() {
        let valid = filled("2023-02-01", "5", "expense", " Rent ")
            .validate()
            .unwrap();
        assert_eq!(valid.category, " Rent ");
    }

    #[test]
    fn validate_reports_missing_fields() {
        let err = filled("", "10", "income", "Salary").validate().unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref msg) if msg.contains("date")));

        let err = filled("2023-01-01", "  ", "income", "Salary")
            .validate()
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref msg) if msg.contains("amount")));
    }

    #[test]
    fn validate_rejects_malformed_values() {
        for draft in [
            filled("01/02/2023", "10", "income", "Salary"),
            filled("2023-01-01", "ten", "income", "Salary"),
            filled("2023-01-01", "-5", "income", "Salary"),
            filled("2023-01-01", "NaN", "income", "Salary"),
            filled("2023-01-01", "5", "refund", "Salary"),
        ] {
            assert!(
                matches!(draft.validate(), Err(StoreError::Validation(_))),
                "expected validation failure for {draft:?}"
            );
        }
    }

    #[test]
    fn from_transaction_round_trips_through_validate() {
        let txn = Transaction::new(
            TransactionId(9),
            NaiveDate::from_ymd_opt(2023, 2, 2).unwrap(),
            50.25,
            TransactionKind::Expense,
            "Bills",
        );
        let draft = Draft::from_transaction(&txn);
        assert_eq!(draft.date, "2023-02-02");
        assert_eq!(draft.amount, "50.25");

        let mut copy = txn.clone();
        draft.validate().unwrap().apply_to(&mut copy);
        assert_eq!(copy, txn);
    }

    #[test]
    fn mode_exposes_edit_target() {
        assert_eq!(DraftMode::Creating.edit_target(), None);
        assert_eq!(
            DraftMode::Editing(TransactionId(4)).edit_target(),
            Some(TransactionId(4))
        );
    }
}
