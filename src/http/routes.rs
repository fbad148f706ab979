//! Route configuration for the point API.

use super::handlers::*;
use super::state::AppState;
use axum::{
    routing::{get, patch},
    Router,
};

/// Create the router with all point routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/point/{id}", get(get_point_handler))
        .route("/point/histories/{id}", get(get_histories_handler))
        .route("/point/charge/{id}", patch(charge_point_handler))
        .route("/point/use/{id}", patch(use_point_handler))
        .with_state(state)
}
