//! Per-user lock coordination
//!
//! This module provides the `UserLockMap`, which owns one mutual-exclusion
//! primitive per user identifier and creates them lazily on first access.
//!
//! # Design
//!
//! The map is a `DashMap` from user ID to a shared `Mutex`. Lazy creation
//! goes through the map's atomic `entry().or_insert_with`, so concurrent
//! first-time acquirers for the same user always end up sharing exactly one
//! primitive; a check-then-create sequence could race and hand out two.
//!
//! Acquisition is scoped: callers hold a `MutexGuard` that is dropped on
//! every exit path, including error returns. There is no timeout; a caller
//! blocks until the lock is free. Deadlock cannot occur because no
//! operation ever holds two user locks at once.
//!
//! The map grows by one entry per distinct user ever mutated and is never
//! evicted. Its lifecycle is owned by the service instance that created it,
//! not the process, so tests can run isolated instances side by side.

use crate::types::UserId;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// Lazily populated map of per-user mutual-exclusion primitives
///
/// Mutating operations for the same user serialize on the shared mutex;
/// operations for different users proceed without any coordination.
#[derive(Debug, Default)]
pub struct UserLockMap {
    locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl UserLockMap {
    /// Create a new empty lock map
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Get the lock for a user, creating it on first access
    ///
    /// Returns a shared handle; callers lock it for the duration of their
    /// mutation. All acquirers of the same user ID receive the same
    /// underlying primitive.
    pub fn acquire(&self, user_id: UserId) -> Arc<Mutex<()>> {
        self.locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
