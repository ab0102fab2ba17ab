use std::collections::VecDeque;

use super::transaction::TransactionId;

/// Most events kept between drains; older ones are dropped first.
pub const MAX_PENDING_EVENTS: usize = 256;

/// Notifications raised by store mutations for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(TransactionId),
    Updated(TransactionId),
    Deleted(TransactionId),
}

impl StoreEvent {
    pub fn transaction_id(&self) -> TransactionId {
        match self {
            StoreEvent::Added(id) | StoreEvent::Updated(id) | StoreEvent::Deleted(id) => *id,
        }
    }

    /// Short toast-style message.
    pub fn message(&self) -> &'static str {
        match self {
            StoreEvent::Added(_) => "Transaction added.",
            StoreEvent::Updated(_) => "Transaction updated.",
            StoreEvent::Deleted(_) => "Transaction deleted.",
        }
    }
}

/// Fire-and-forget event queue. Draining hands over every pending event and
/// nothing is redelivered afterwards. A host that never drains loses the
/// oldest events once [`MAX_PENDING_EVENTS`] is reached.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: VecDeque<StoreEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: StoreEvent) {
        if self.pending.len() >= MAX_PENDING_EVENTS {
            if let Some(dropped) = self.pending.pop_front() {
                tracing::debug!(?dropped, "event queue full, dropping oldest event");
            }
        }
        self.pending.push_back(event);
    }

    pub fn drain(&mut self) -> Vec<StoreEvent> {
        self.pending.drain(..).collect()
    }
}
