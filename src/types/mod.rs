//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `point`: Balance, history, and identifier types
//! - `error`: Error types for the point service

pub mod error;
pub mod point;

pub use error::PointError;
pub use point::{PointAmount, PointBalance, PointHistory, TransactionType, UserId};
