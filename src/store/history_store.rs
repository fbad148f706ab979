//! In-memory history table
//!
//! An append-only log of balance mutations. Entries share one id
//! sequence across all users; per-user ordering is the insertion order
//! of the log.

use crate::core::traits::HistoryStore;
use crate::types::{PointAmount, PointHistory, TransactionType, UserId};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

/// History store keeping the append-only log in memory
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    entries: Mutex<Vec<PointHistory>>,
    cursor: AtomicI64,
}

impl InMemoryHistoryStore {
    /// Create an empty history store
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            cursor: AtomicI64::new(0),
        }
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn append(
        &self,
        user_id: UserId,
        amount: PointAmount,
        tx_type: TransactionType,
        update_millis: i64,
    ) -> PointHistory {
        let id = self.cursor.fetch_add(1, Ordering::Relaxed) + 1;
        let entry = PointHistory {
            id,
            user_id,
            amount,
            tx_type,
            update_millis,
        };
        self.entries.lock().push(entry);
        entry
    }

    fn list_by_user(&self, user_id: UserId) -> Vec<PointHistory> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .copied()
            .collect()
    }
}
