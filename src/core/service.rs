//! Charge/use orchestration and the read path
//!
//! This module provides the `PointService`, which executes charge and use
//! as read-validate-write-record sequences under the per-user lock, and
//! exposes the lock-free read operations.
//!
//! # Concurrency
//!
//! Mutations for the same user are fully serialized by the lock map;
//! mutations for different users never block each other. Reads are not
//! serialized against mutations and may observe a balance or history
//! mid-transition relative to a concurrent mutation. That trade-off is
//! deliberate: the correctness target is per-user balance consistency,
//! not snapshot isolation across operations.

use crate::core::locks::UserLockMap;
use crate::core::traits::{BalanceStore, HistoryStore};
use crate::core::validation;
use crate::store::{InMemoryBalanceStore, InMemoryHistoryStore};
use crate::types::{PointAmount, PointBalance, PointError, PointHistory, TransactionType, UserId};
use tracing::debug;

/// The balance-mutation engine
///
/// Owns the two collaborating stores and the per-user lock map. The lock
/// map's lifecycle is tied to this instance, so separate service
/// instances are fully isolated from each other.
pub struct PointService<B, H> {
    balances: B,
    histories: H,
    locks: UserLockMap,
}

/// Service wired to the bundled in-memory stores
pub type InMemoryPointService = PointService<InMemoryBalanceStore, InMemoryHistoryStore>;

impl InMemoryPointService {
    /// Create a service backed by fresh in-memory stores
    pub fn in_memory() -> Self {
        Self::new(InMemoryBalanceStore::new(), InMemoryHistoryStore::new())
    }
}

impl<B: BalanceStore, H: HistoryStore> PointService<B, H> {
    /// Create a service from its collaborating stores
    pub fn new(balances: B, histories: H) -> Self {
        Self {
            balances,
            histories,
            locks: UserLockMap::new(),
        }
    }

    /// Charge points to a user's balance
    ///
    /// Runs under the user's lock: read the current balance (absence
    /// counts as zero), validate the amount and the resulting balance,
    /// then write the balance and append one CHARGE history entry stamped
    /// with the written balance's timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving no balance change and no history entry:
    /// - `InvalidAmount` if `amount <= 0`
    /// - `ChargeLimitExceeded` if `amount` exceeds the per-charge limit
    /// - `MaxBalanceExceeded` if the result would exceed the maximum holding
    pub fn charge_point(
        &self,
        user_id: UserId,
        amount: PointAmount,
    ) -> Result<PointBalance, PointError> {
        let lock = self.locks.acquire(user_id);
        let _guard = lock.lock();

        let current = self.balances.read(user_id).map_or(0, |b| b.point);
        // Saturating keeps an absurd wire amount from wrapping; the
        // saturated value still fails the limit checks.
        let candidate = current.saturating_add(amount);
        validation::validate_charge(amount, candidate)?;

        let written = self.balances.write(user_id, candidate);
        self.histories
            .append(user_id, amount, TransactionType::Charge, written.update_millis);

        debug!(user_id, amount, balance = written.point, "charged points");
        Ok(written)
    }

    /// Use points from a user's balance
    ///
    /// Same shape as [`charge_point`](Self::charge_point) with the
    /// use-side validation: no per-use ceiling, but the balance must
    /// cover the full amount.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving no balance change and no history entry:
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InsufficientBalance` if the result would go negative
    pub fn use_point(
        &self,
        user_id: UserId,
        amount: PointAmount,
    ) -> Result<PointBalance, PointError> {
        let lock = self.locks.acquire(user_id);
        let _guard = lock.lock();

        let current = self.balances.read(user_id).map_or(0, |b| b.point);
        let candidate = current.saturating_sub(amount);
        validation::validate_use(amount, candidate)?;

        let written = self.balances.write(user_id, candidate);
        self.histories
            .append(user_id, amount, TransactionType::Use, written.update_millis);

        debug!(user_id, amount, balance = written.point, "used points");
        Ok(written)
    }

    /// Look up a user's current balance
    ///
    /// Not lock-protected. Unlike the mutating path, absence here is
    /// `UserNotFound`: only a mutation ever invents a zero balance.
    pub fn get_point(&self, user_id: UserId) -> Result<PointBalance, PointError> {
        self.balances
            .read(user_id)
            .ok_or_else(|| PointError::user_not_found(user_id))
    }

    /// List a user's point history in insertion order
    ///
    /// Not lock-protected; never fails. A user with no history yields an
    /// empty vector, not an error.
    pub fn get_histories(&self, user_id: UserId) -> Vec<PointHistory> {
        self.histories.list_by_user(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{MAX_POINT, MAX_POINT_PER_CHARGE};

    fn service() -> InMemoryPointService {
        InMemoryPointService::in_memory()
    }

    #[test]
    fn test_charge_creates_balance_from_zero() {
        let service = service();

        let balance = service.charge_point(1, 500).unwrap();

        assert_eq!(balance.user_id, 1);
        assert_eq!(balance.point, 500);
    }

    #[test]
    fn test_charge_accumulates() {
        let service = service();

        service.charge_point(1, 300).unwrap();
        let balance = service.charge_point(1, 200).unwrap();

        assert_eq!(balance.point, 500);
    }

    #[test]
    fn test_use_decreases_balance() {
        let service = service();

        service.charge_point(1, 1_000).unwrap();
        let balance = service.use_point(1, 400).unwrap();

        assert_eq!(balance.point, 600);
    }

    #[test]
    fn test_charge_to_exactly_max_point_succeeds() {
        let service = service();

        // 900_000 in nine charges of the per-charge maximum
        for _ in 0..9 {
            service.charge_point(1, MAX_POINT_PER_CHARGE).unwrap();
        }
        let balance = service.charge_point(1, MAX_POINT_PER_CHARGE).unwrap();

        assert_eq!(balance.point, MAX_POINT);
    }

    #[test]
    fn test_charge_over_max_point_is_rejected() {
        let service = service();

        for _ in 0..10 {
            service.charge_point(1, MAX_POINT_PER_CHARGE).unwrap();
        }
        let result = service.charge_point(1, 1);

        assert_eq!(
            result,
            Err(PointError::max_balance_exceeded(MAX_POINT + 1, MAX_POINT))
        );
    }

    #[test]
    fn test_charge_over_per_charge_limit_is_rejected_regardless_of_balance() {
        let service = service();

        let result = service.charge_point(1, MAX_POINT_PER_CHARGE + 1);

        assert_eq!(
            result,
            Err(PointError::charge_limit_exceeded(
                MAX_POINT_PER_CHARGE + 1,
                MAX_POINT_PER_CHARGE
            ))
        );
    }

    #[test]
    fn test_use_entire_balance_drains_to_zero() {
        let service = service();

        service.charge_point(1, 700).unwrap();
        let balance = service.use_point(1, 700).unwrap();

        assert_eq!(balance.point, 0);
        // A zero balance is still a known user
        assert_eq!(service.get_point(1).unwrap().point, 0);
    }

    #[test]
    fn test_use_one_over_balance_is_rejected() {
        let service = service();

        service.charge_point(1, 700).unwrap();
        let result = service.use_point(1, 701);

        assert_eq!(result, Err(PointError::insufficient_balance(700, 701)));
    }

    #[test]
    fn test_rejected_mutation_leaves_no_trace() {
        let service = service();
        service.charge_point(1, 500).unwrap();

        assert!(service.charge_point(1, 0).is_err());
        assert!(service.charge_point(1, MAX_POINT_PER_CHARGE + 1).is_err());
        assert!(service.use_point(1, -3).is_err());
        assert!(service.use_point(1, 501).is_err());

        assert_eq!(service.get_point(1).unwrap().point, 500);
        assert_eq!(service.get_histories(1).len(), 1);
    }

    #[test]
    fn test_get_point_fails_for_unknown_user() {
        let service = service();

        assert_eq!(service.get_point(99), Err(PointError::user_not_found(99)));
    }

    #[test]
    fn test_get_point_succeeds_after_first_mutation() {
        let service = service();
        assert!(service.get_point(1).is_err());

        service.charge_point(1, 100).unwrap();

        assert_eq!(service.get_point(1).unwrap().point, 100);
    }

    #[test]
    fn test_get_point_is_idempotent_between_mutations() {
        let service = service();
        service.charge_point(1, 250).unwrap();

        let first = service.get_point(1).unwrap();
        let second = service.get_point(1).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_mutation_does_not_create_balance() {
        let service = service();

        assert!(service.use_point(1, 100).is_err());

        // The rejected use never wrote, so the user is still unknown
        assert_eq!(service.get_point(1), Err(PointError::user_not_found(1)));
    }

    #[test]
    fn test_histories_record_each_successful_mutation() {
        let service = service();

        service.charge_point(1, 1_000).unwrap();
        service.use_point(1, 300).unwrap();
        service.charge_point(1, 50).unwrap();

        let histories = service.get_histories(1);
        assert_eq!(histories.len(), 3);
        assert_eq!(histories[0].tx_type, TransactionType::Charge);
        assert_eq!(histories[0].amount, 1_000);
        assert_eq!(histories[1].tx_type, TransactionType::Use);
        assert_eq!(histories[1].amount, 300);
        assert_eq!(histories[2].tx_type, TransactionType::Charge);
        assert_eq!(histories[2].amount, 50);
    }

    #[test]
    fn test_history_timestamp_matches_written_balance() {
        let service = service();

        let balance = service.charge_point(1, 100).unwrap();

        let histories = service.get_histories(1);
        assert_eq!(histories[0].update_millis, balance.update_millis);
    }

    #[test]
    fn test_histories_empty_for_unknown_user() {
        let service = service();

        assert!(service.get_histories(42).is_empty());
    }

    #[test]
    fn test_users_are_isolated() {
        let service = service();

        service.charge_point(1, 100).unwrap();
        service.charge_point(2, 200).unwrap();
        service.use_point(2, 50).unwrap();

        assert_eq!(service.get_point(1).unwrap().point, 100);
        assert_eq!(service.get_point(2).unwrap().point, 150);
        assert_eq!(service.get_histories(1).len(), 1);
        assert_eq!(service.get_histories(2).len(), 2);
    }

    #[test]
    fn test_huge_amount_does_not_wrap() {
        let service = service();
        service.charge_point(1, 500).unwrap();

        let charge = service.charge_point(1, PointAmount::MAX);
        assert!(matches!(charge, Err(PointError::ChargeLimitExceeded { .. })));

        let usage = service.use_point(1, PointAmount::MAX);
        assert!(matches!(usage, Err(PointError::InsufficientBalance { .. })));

        assert_eq!(service.get_point(1).unwrap().point, 500);
    }
}
