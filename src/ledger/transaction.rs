use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// Stable identifier minted when a draft is first committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a transaction relative to the wallet balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = StoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(StoreError::Validation(format!(
                "unknown transaction type `{other}`"
            ))),
        }
    }
}

/// A committed income or expense entry.
///
/// Serialized with the field names of the export file: `id`, `date`, `amount`,
/// `type`, `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        date: NaiveDate,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            amount,
            kind,
            category: category.into(),
        }
    }

    /// Contribution of this entry to the balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn kind_parses_form_values() {
        assert_eq!(
            "income".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            " Expense ".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
        let err = "transfer".parse::<TransactionKind>().unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref msg) if msg.contains("transfer")));
    }

    #[test]
    fn signed_amount_follows_kind() {
        let income = Transaction::new(
            TransactionId(1),
            date(2023, 1, 1),
            500.0,
            TransactionKind::Income,
            "Salary",
        );
        let expense = Transaction {
            id: TransactionId(2),
            kind: TransactionKind::Expense,
            ..income.clone()
        };
        assert_eq!(income.signed_amount(), 500.0);
        assert_eq!(expense.signed_amount(), -500.0);
        assert!(!expense.is_income());
    }

    #[test]
    fn serializes_with_export_field_names() {
        let txn = Transaction::new(
            TransactionId(7),
            date(2023, 2, 1),
            200.0,
            TransactionKind::Income,
            "Salary",
        );
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "date": "2023-02-01",
                "amount": 200.0,
                "type": "income",
                "category": "Salary"
            })
        );
    }
}
