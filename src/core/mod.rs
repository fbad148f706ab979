//! Core business logic module
//!
//! This module contains the balance-mutation engine:
//! - `traits` - Store contracts consumed by the service
//! - `locks` - Per-user lock coordination
//! - `validation` - Balance constraints and amount validation
//! - `service` - Charge/use orchestration and the read path

pub mod locks;
pub mod service;
pub mod traits;
pub mod validation;

pub use locks::UserLockMap;
pub use service::{InMemoryPointService, PointService};
pub use traits::{BalanceStore, HistoryStore};
pub use validation::{MAX_POINT, MAX_POINT_PER_CHARGE, MIN_POINT};
