//! In-memory store implementations
//!
//! Runnable implementations of the store contracts in [`crate::core::traits`].
//! Both keep everything in process memory; durability is out of scope.

pub mod balance_store;
pub mod history_store;

pub use balance_store::InMemoryBalanceStore;
pub use history_store::InMemoryHistoryStore;

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, for store-side timestamping
pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as i64)
}
