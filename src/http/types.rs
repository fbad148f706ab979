//! Wire-facing response types for the HTTP API
//!
//! Balances and history entries serialize directly from the domain
//! types; only the error envelope is HTTP-specific.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Error payload returned for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Numeric status code as a string, e.g. "400"
    pub code: String,
    /// Human-readable description of the failure
    pub message: String,
}

impl ErrorResponse {
    /// Build the common error envelope for a status and message
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16().to_string(),
            message: message.into(),
        }
    }
}
