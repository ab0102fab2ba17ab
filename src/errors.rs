use thiserror::Error;

use crate::ledger::TransactionId;

/// Error type that captures common store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid transaction: {0}")]
    Validation(String),
    #[error("Transaction {0} not found")]
    NotFound(TransactionId),
    #[error("Duplicate transaction id {0}")]
    DuplicateId(TransactionId),
    #[error("Transaction id space exhausted")]
    IdExhausted,
}

pub type StoreResult<T> = Result<T, StoreError>;
