//! Error types for the point service
//!
//! This module defines all error kinds that can occur while mutating or
//! querying point balances. Errors are designed to be descriptive and
//! map cleanly onto HTTP status codes at the boundary layer.
//!
//! # Error Categories
//!
//! - **Validation Errors**: invalid amount, charge limit, maximum holding,
//!   insufficient balance. Detected before any store write; a rejected
//!   mutation leaves no partial state.
//! - **Lookup Errors**: user not found on the query path.

use crate::types::point::{PointAmount, UserId};
use thiserror::Error;

/// Main error type for the point service
///
/// Each variant carries the context needed to produce a useful message
/// for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointError {
    /// A non-positive amount was supplied to charge or use
    #[error("amount must be greater than 0, got {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: PointAmount,
    },

    /// A single charge exceeded the per-charge ceiling
    ///
    /// The limit applies per charge regardless of the current balance.
    #[error("charge amount {amount} exceeds the per-charge limit of {limit} points")]
    ChargeLimitExceeded {
        /// The rejected charge amount
        amount: PointAmount,
        /// The per-charge ceiling
        limit: PointAmount,
    },

    /// The resulting balance would exceed the maximum holding
    #[error("resulting balance {candidate} would exceed the maximum holding of {max} points")]
    MaxBalanceExceeded {
        /// The balance the charge would have produced
        candidate: PointAmount,
        /// The maximum holding
        max: PointAmount,
    },

    /// The resulting balance would go negative
    ///
    /// The message conveys the current balance, since the amount
    /// available for use is exactly the pre-use balance.
    #[error("cannot use {requested} points: current balance is {balance}")]
    InsufficientBalance {
        /// The pre-use balance
        balance: PointAmount,
        /// The requested use amount
        requested: PointAmount,
    },

    /// Balance lookup for a user with no recorded balance
    ///
    /// Only the query path produces this; the mutating path treats an
    /// absent balance as zero.
    #[error("no point balance found for user {user_id}")]
    UserNotFound {
        /// The unknown user ID
        user_id: UserId,
    },
}

// Helper functions for creating common errors

impl PointError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: PointAmount) -> Self {
        PointError::InvalidAmount { amount }
    }

    /// Create a ChargeLimitExceeded error
    pub fn charge_limit_exceeded(amount: PointAmount, limit: PointAmount) -> Self {
        PointError::ChargeLimitExceeded { amount, limit }
    }

    /// Create a MaxBalanceExceeded error
    pub fn max_balance_exceeded(candidate: PointAmount, max: PointAmount) -> Self {
        PointError::MaxBalanceExceeded { candidate, max }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(balance: PointAmount, requested: PointAmount) -> Self {
        PointError::InsufficientBalance { balance, requested }
    }

    /// Create a UserNotFound error
    pub fn user_not_found(user_id: UserId) -> Self {
        PointError::UserNotFound { user_id }
    }
}
