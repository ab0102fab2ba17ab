use crate::errors::{StoreError, StoreResult};

use super::transaction::TransactionId;

/// Monotonic source of transaction identifiers.
///
/// Ids are never reused, even after the transaction carrying them is deleted.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> StoreResult<TransactionId> {
        let id = TransactionId(self.next);
        self.next = self.next.checked_add(1).ok_or(StoreError::IdExhausted)?;
        Ok(id)
    }

    /// Moves the counter past an id that was minted elsewhere.
    pub fn observe(&mut self, id: TransactionId) -> StoreResult<()> {
        if id.0 >= self.next {
            self.next = id.0.checked_add(1).ok_or(StoreError::IdExhausted)?;
        }
        Ok(())
    }
}
