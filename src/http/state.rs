//! Shared state for the HTTP layer

use crate::core::InMemoryPointService;
use std::sync::Arc;

/// State handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// The balance-mutation engine behind the API
    pub service: Arc<InMemoryPointService>,
}

impl AppState {
    /// Wrap a service for sharing across handlers
    pub fn new(service: InMemoryPointService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
