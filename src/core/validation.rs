//! Balance constraints and amount validation
//!
//! Validation runs before any store write, so a rejected mutation leaves
//! no balance change and no history entry. Checks fail fast in a fixed
//! order.

use crate::types::{PointAmount, PointError};

/// Lower bound of any balance
pub const MIN_POINT: PointAmount = 0;

/// Maximum points a single user may hold
pub const MAX_POINT: PointAmount = 1_000_000;

/// Maximum amount of a single charge
pub const MAX_POINT_PER_CHARGE: PointAmount = 100_000;

/// Validate a charge of `amount` that would produce `candidate`
///
/// Checked in order: non-positive amount, per-charge limit, maximum
/// holding. Equality at `MAX_POINT` is allowed.
pub fn validate_charge(amount: PointAmount, candidate: PointAmount) -> Result<(), PointError> {
    if amount <= 0 {
        return Err(PointError::invalid_amount(amount));
    }
    if amount > MAX_POINT_PER_CHARGE {
        return Err(PointError::charge_limit_exceeded(amount, MAX_POINT_PER_CHARGE));
    }
    if candidate > MAX_POINT {
        return Err(PointError::max_balance_exceeded(candidate, MAX_POINT));
    }
    Ok(())
}

/// Validate a use of `amount` that would produce `candidate`
///
/// There is no per-use ceiling; only non-positive amounts and negative
/// results are rejected. Draining the balance to exactly zero is allowed.
pub fn validate_use(amount: PointAmount, candidate: PointAmount) -> Result<(), PointError> {
    if amount <= 0 {
        return Err(PointError::invalid_amount(amount));
    }
    if candidate < MIN_POINT {
        // The pre-use balance is the amount actually available
        return Err(PointError::insufficient_balance(amount + candidate, amount));
    }
    Ok(())
}
