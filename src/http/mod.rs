//! HTTP boundary layer
//!
//! Thin axum layer translating inbound requests to core operations and
//! mapping errors to status codes:
//! - `routes` - Router configuration
//! - `handlers` - Request handlers and error-to-status mapping
//! - `state` - Shared application state
//! - `types` - Wire-facing response types

pub mod handlers;
pub mod routes;
pub mod state;
pub mod types;

pub use routes::create_router;
pub use state::AppState;
