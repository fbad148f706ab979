//! Store contracts consumed by the point service
//!
//! This module defines the trait abstractions for the two collaborating
//! stores, so the service can run against the bundled in-memory tables
//! or any other implementation with the same atomicity guarantees.

use crate::types::{PointAmount, PointBalance, PointHistory, TransactionType, UserId};

/// Contract for the balance store
///
/// A single read or write must be individually atomic (no partially
/// written balance is ever observable). The service enforces the rest of
/// the mutation discipline by holding the per-user lock around its
/// read-validate-write-record sequence.
pub trait BalanceStore: Send + Sync {
    /// Read the current balance for a user
    ///
    /// Returns `None` when the user has no recorded balance. Callers
    /// decide what absence means: the mutating path starts from zero,
    /// the query path reports the user as unknown.
    fn read(&self, user_id: UserId) -> Option<PointBalance>;

    /// Write a new balance for a user, creating the record if absent
    ///
    /// The store assigns `update_millis` and returns the written balance.
    fn write(&self, user_id: UserId, amount: PointAmount) -> PointBalance;
}

/// Contract for the append-only history store
///
/// Entries are immutable once appended. Ordering is insertion order per
/// user; no cross-user ordering is guaranteed.
pub trait HistoryStore: Send + Sync {
    /// Append one history entry, assigning the next monotonic id
    fn append(
        &self,
        user_id: UserId,
        amount: PointAmount,
        tx_type: TransactionType,
        update_millis: i64,
    ) -> PointHistory;

    /// List all entries for a user in insertion order
    ///
    /// Returns an empty vector when the user has no entries.
    fn list_by_user(&self, user_id: UserId) -> Vec<PointHistory>;
}
