//! Point Service Library
//! # Overview
//!
//! This library provides a per-user point wallet: an integer balance per
//! user, mutated by charge and use operations and observed through a
//! balance lookup and an append-only history.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (PointBalance, PointHistory, PointError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::locks`] - Per-user lock coordination
//!   - [`core::validation`] - Balance constraints
//!   - [`core::service`] - Charge/use orchestration and the read path
//! - [`store`] - In-memory balance and history stores
//! - [`http`] - axum boundary layer mapping errors to status codes
//!
//! # Concurrency Model
//!
//! Mutations for the same user are serialized by a lazily created
//! per-user lock; mutations for different users run fully concurrently.
//! Reads are not serialized against mutations and may observe state
//! mid-transition.
//!
//! # Balance Invariants
//!
//! - A balance always stays within `[0, 1_000_000]` points
//! - A single charge never exceeds 100,000 points
//! - Every successful mutation appends exactly one history entry;
//!   rejected mutations leave no trace

// Module declarations
pub mod cli;
pub mod core;
pub mod http;
pub mod store;
pub mod types;

pub use crate::core::{
    BalanceStore, HistoryStore, InMemoryPointService, PointService, UserLockMap, MAX_POINT,
    MAX_POINT_PER_CHARGE,
};
pub use crate::http::{create_router, AppState};
pub use crate::store::{InMemoryBalanceStore, InMemoryHistoryStore};
pub use crate::types::{PointAmount, PointBalance, PointError, PointHistory, TransactionType, UserId};
