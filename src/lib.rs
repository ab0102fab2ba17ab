#![doc(test(attr(deny(warnings))))]

//! Wallet Core holds the headless state of a personal wallet tracker: the
//! recorded income/expense transactions, the form draft being composed or
//! edited, the running balance, and the JSON export.

pub mod config;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod utils;

pub use errors::{StoreError, StoreResult};
pub use ledger::{
    BalanceSummary, Draft, DraftField, DraftMode, StoreEvent, Transaction, TransactionId,
    TransactionKind, TransactionStore,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Wallet Core tracing initialized.");
    });
}
