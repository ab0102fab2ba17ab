//! Transaction models, the form draft, and the in-memory store that ties them together.

pub mod category;
pub mod draft;
pub mod events;
pub mod id;
pub mod store;
pub mod summary;
pub mod transaction;

pub use draft::{Draft, DraftField, DraftMode, ValidatedDraft};
pub use events::{EventQueue, StoreEvent};
pub use id::IdAllocator;
pub use store::TransactionStore;
pub use summary::BalanceSummary;
pub use transaction::{Transaction, TransactionId, TransactionKind};
