#![allow(dead_code)]

use wallet_core::{DraftField, TransactionId, TransactionStore};

/// Fills every form field and commits, panicking on rejection.
pub fn commit(
    store: &mut TransactionStore,
    date: &str,
    amount: &str,
    kind: &str,
    category: &str,
) -> TransactionId {
    store.set_draft_field(DraftField::Date, date);
    store.set_draft_field(DraftField::Amount, amount);
    store.set_draft_field(DraftField::Type, kind);
    store.set_draft_field(DraftField::Category, category);
    store.commit_draft().expect("draft should commit")
}
