use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::{
    config::StoreConfig,
    errors::{StoreError, StoreResult},
    export,
};

use super::{
    category,
    draft::{check_amount, Draft, DraftField, DraftMode},
    events::{EventQueue, StoreEvent},
    id::IdAllocator,
    summary::BalanceSummary,
    transaction::{Transaction, TransactionId, TransactionKind},
};

/// Owns the ordered transaction list and the single form draft.
///
/// Every operation runs to completion synchronously; the presentation layer
/// holds the store exclusively and re-renders from [`TransactionStore::transactions`],
/// [`TransactionStore::draft`] and [`TransactionStore::compute_balance`].
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    draft: Draft,
    mode: DraftMode,
    ids: IdAllocator,
    events: EventQueue,
    config: StoreConfig,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    pub fn with_config(config: &StoreConfig) -> Self {
        let mut store = Self {
            transactions: Vec::new(),
            draft: Draft::with_defaults(config.default_kind, config.default_category.clone()),
            mode: DraftMode::Creating,
            ids: IdAllocator::new(),
            events: EventQueue::default(),
            config: config.clone(),
        };
        if config.seed_sample_data {
            store.seed_samples();
        }
        store
    }

    /// Store preloaded with the two demo entries shown on first launch.
    pub fn with_sample_data() -> Self {
        Self::with_config(&StoreConfig {
            seed_sample_data: true,
            ..StoreConfig::default()
        })
    }

    /// Rebuilds a store from a previously exported list, keeping its order.
    ///
    /// Rows are held to the same rules as committed drafts: unique ids and a
    /// finite, non-negative amount.
    pub fn from_transactions(mut transactions: Vec<Transaction>) -> StoreResult<Self> {
        let mut store = Self::new();
        let mut seen = HashSet::with_capacity(transactions.len());
        for txn in &mut transactions {
            let id = txn.id;
            if !seen.insert(id) {
                return Err(StoreError::DuplicateId(id));
            }
            txn.amount = check_amount(txn.amount).map_err(|err| match err {
                StoreError::Validation(reason) => {
                    StoreError::Validation(format!("transaction {id}: {reason}"))
                }
                other => other,
            })?;
            store.ids.observe(id)?;
        }
        debug!(count = transactions.len(), "restored transactions");
        store.transactions = transactions;
        Ok(store)
    }

    fn seed_samples(&mut self) {
        let samples = [
            (NaiveDate::from_ymd_opt(2023, 1, 1), 500.0, TransactionKind::Income, "Salary"),
            (NaiveDate::from_ymd_opt(2023, 1, 5), 100.0, TransactionKind::Expense, "Groceries"),
        ];
        for (date, amount, kind, category) in samples {
            if let (Some(date), Ok(id)) = (date, self.ids.allocate()) {
                self.transactions
                    .push(Transaction::new(id, date, amount, kind, category));
            }
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    fn transaction_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    /// Category suggestions for the picker.
    pub fn categories(&self) -> &[String] {
        &self.config.categories
    }

    pub fn is_suggested_category(&self, name: &str) -> bool {
        category::is_suggested(&self.config.categories, name)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Whether the submit action should be enabled.
    pub fn can_commit(&self) -> bool {
        self.draft.is_committable()
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        debug!(?field, %value, "draft field updated");
        self.draft.set(field, value);
    }

    /// Same as [`Self::set_draft_field`] but addressed by form input name.
    pub fn set_draft_field_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> StoreResult<()> {
        let field = name.parse::<DraftField>()?;
        self.set_draft_field(field, value);
        Ok(())
    }

    /// Inserts a new transaction or applies the draft to the edit target, then
    /// resets the draft. An invalid draft leaves the store untouched.
    pub fn commit_draft(&mut self) -> StoreResult<TransactionId> {
        let valid = match self.draft.validate() {
            Ok(valid) => valid,
            Err(err) => {
                warn!(error = %err, "rejected draft commit");
                return Err(err);
            }
        };

        let (id, event) = match self.mode {
            DraftMode::Editing(id) => {
                let target = self
                    .transaction_mut(id)
                    .ok_or(StoreError::NotFound(id))?;
                valid.apply_to(target);
                info!(%id, "updated transaction");
                (id, StoreEvent::Updated(id))
            }
            DraftMode::Creating => {
                let id = self.ids.allocate()?;
                self.transactions.push(valid.into_transaction(id));
                info!(%id, count = self.transactions.len(), "added transaction");
                (id, StoreEvent::Added(id))
            }
        };

        self.events.push(event);
        self.reset_draft();
        Ok(id)
    }

    /// Loads a copy of the transaction into the draft and switches to editing.
    pub fn begin_edit(&mut self, id: TransactionId) -> StoreResult<()> {
        let draft = self
            .transaction(id)
            .map(Draft::from_transaction)
            .ok_or(StoreError::NotFound(id))?;
        self.draft = draft;
        self.mode = DraftMode::Editing(id);
        debug!(%id, "editing transaction");
        Ok(())
    }

    /// Abandons the current edit, if any, and clears the form.
    pub fn cancel_edit(&mut self) {
        if let DraftMode::Editing(id) = self.mode {
            debug!(%id, "edit cancelled");
        }
        self.reset_draft();
    }

    /// Removes the transaction with `id`. Unknown ids are ignored.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        let removed = self.transactions.remove(index);
        if self.mode.edit_target() == Some(id) {
            self.reset_draft();
        }
        self.events.push(StoreEvent::Deleted(id));
        info!(%id, count = self.transactions.len(), "deleted transaction");
        Some(removed)
    }

    /// Income total minus expense total.
    pub fn compute_balance(&self) -> f64 {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    pub fn summary(&self) -> BalanceSummary {
        BalanceSummary::from_transactions(&self.transactions)
    }

    /// Serializes the whole list as a JSON array.
    pub fn export_snapshot(&self) -> StoreResult<String> {
        export::to_json(&self.transactions, self.config.pretty_export)
    }

    /// Hands over pending notifications.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        self.events.drain()
    }

    fn reset_draft(&mut self) {
        self.mode = DraftMode::Creating;
        self.draft = Draft::with_defaults(
            self.config.default_kind,
            self.config.default_category.clone(),
        );
    }
}
