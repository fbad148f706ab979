//! Point-related types for the point service
//!
//! This module defines the balance and history records managed by the
//! service, along with the identifier aliases used throughout the system.

use serde::{Deserialize, Serialize};

/// User identifier
///
/// Supports user IDs from 0 to 18,446,744,073,709,551,615
pub type UserId = u64;

/// Point amount in whole-number units
///
/// A 64-bit signed integer gives far more headroom than the maximum
/// holding of 1,000,000 points, so balance arithmetic never approaches
/// the overflow bounds.
pub type PointAmount = i64;

/// Kinds of balance mutation recorded in the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Credit points to a user's balance
    Charge,

    /// Debit points from a user's balance
    ///
    /// Requires the balance to cover the full amount.
    Use,
}

/// Current point balance of a single user
///
/// One balance exists per user. Absence of a record is a distinct state
/// from a zero balance: lookups treat absence as "unknown user", while
/// the mutating path starts from an implicit zero balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointBalance {
    /// The user this balance belongs to
    pub user_id: UserId,

    /// Current point amount, always within `[0, MAX_POINT]`
    pub point: PointAmount,

    /// Timestamp of the last write, in milliseconds since the Unix epoch
    ///
    /// Assigned by the balance store on every write.
    pub update_millis: i64,
}

/// A single entry in a user's point history
///
/// Created exactly once per successful mutation; never updated or
/// deleted. Entries for one user are ordered by insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointHistory {
    /// Monotonic entry identifier assigned by the history store
    pub id: i64,

    /// The user this entry belongs to
    pub user_id: UserId,

    /// The mutation amount, always positive
    pub amount: PointAmount,

    /// Whether the mutation was a charge or a use
    pub tx_type: TransactionType,

    /// Timestamp of the mutation, taken from the written balance
    pub update_millis: i64,
}
