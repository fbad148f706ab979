//! In-memory balance table
//!
//! Backed by a `DashMap` so individual reads and writes are atomic
//! without a global lock; concurrent access to different users never
//! contends. Serialization of a full read-validate-write sequence is
//! the service's job, not the store's.

use crate::core::traits::BalanceStore;
use crate::store::now_millis;
use crate::types::{PointAmount, PointBalance, UserId};
use dashmap::DashMap;

/// Balance store keeping one record per user in memory
#[derive(Debug, Default)]
pub struct InMemoryBalanceStore {
    balances: DashMap<UserId, PointBalance>,
}

impl InMemoryBalanceStore {
    /// Create an empty balance store
    pub fn new() -> Self {
        Self {
            balances: DashMap::new(),
        }
    }
}

impl BalanceStore for InMemoryBalanceStore {
    fn read(&self, user_id: UserId) -> Option<PointBalance> {
        self.balances.get(&user_id).map(|entry| *entry.value())
    }

    fn write(&self, user_id: UserId, amount: PointAmount) -> PointBalance {
        let balance = PointBalance {
            user_id,
            point: amount,
            update_millis: now_millis(),
        };
        self.balances.insert(user_id, balance);
        balance
    }
}
