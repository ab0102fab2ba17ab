//! JSON export of the transaction list.
//!
//! The export is a bare JSON array of transactions with the fields `id`, `date`,
//! `amount`, `type` and `category`. There is no schema header or version field.

use std::path::{Path, PathBuf};

use crate::{
    errors::StoreResult,
    ledger::{Transaction, TransactionStore},
    utils::persistence::{read_to_string, write_atomic},
};

/// File name used for downloads.
pub const EXPORT_FILE_NAME: &str = "transactions.json";

pub fn to_json(transactions: &[Transaction], pretty: bool) -> StoreResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(transactions)?
    } else {
        serde_json::to_string(transactions)?
    };
    Ok(json)
}

pub fn parse_snapshot(data: &str) -> StoreResult<Vec<Transaction>> {
    Ok(serde_json::from_str(data)?)
}

/// Writes the store's snapshot to `dir/transactions.json` and returns the path.
pub fn write_export(store: &TransactionStore, dir: &Path) -> StoreResult<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    let json = store.export_snapshot()?;
    write_atomic(&path, &json)?;
    tracing::info!(
        path = %path.display(),
        count = store.len(),
        "exported transactions"
    );
    Ok(path)
}

/// Reads a file previously produced by [`write_export`].
pub fn read_export(path: &Path) -> StoreResult<Vec<Transaction>> {
    let data = read_to_string(path)?;
    parse_snapshot(&data)
}
