//! Request handlers for the point API
//!
//! Handlers stay thin: parse the path and body, call the service, map
//! the result. Validation failures become 400, unknown users 404;
//! anything outside the service's error taxonomy would surface as a
//! generic 500 from the framework.

use super::state::AppState;
use super::types::ErrorResponse;
use crate::types::{PointAmount, PointError, UserId};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

/// Handler for `GET /point/{id}` - current balance.
pub async fn get_point_handler(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> impl IntoResponse {
    match state.service.get_point(user_id) {
        Ok(balance) => Json(balance).into_response(),
        Err(error) => reject(error),
    }
}

/// Handler for `GET /point/histories/{id}` - full point history.
///
/// Always 200; a user with no history gets an empty array.
pub async fn get_histories_handler(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> impl IntoResponse {
    Json(state.service.get_histories(user_id))
}

/// Handler for `PATCH /point/charge/{id}` - charge points.
///
/// The body is a bare JSON integer amount.
pub async fn charge_point_handler(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(amount): Json<PointAmount>,
) -> impl IntoResponse {
    match state.service.charge_point(user_id, amount) {
        Ok(balance) => Json(balance).into_response(),
        Err(error) => reject(error),
    }
}

/// Handler for `PATCH /point/use/{id}` - use points.
///
/// The body is a bare JSON integer amount.
pub async fn use_point_handler(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(amount): Json<PointAmount>,
) -> impl IntoResponse {
    match state.service.use_point(user_id, amount) {
        Ok(balance) => Json(balance).into_response(),
        Err(error) => reject(error),
    }
}

/// Map a service error to its status code
fn status_for(error: &PointError) -> StatusCode {
    match error {
        PointError::UserNotFound { .. } => StatusCode::NOT_FOUND,
        PointError::InvalidAmount { .. }
        | PointError::ChargeLimitExceeded { .. }
        | PointError::MaxBalanceExceeded { .. }
        | PointError::InsufficientBalance { .. } => StatusCode::BAD_REQUEST,
    }
}

/// Build the error response for a rejected request
fn reject(error: PointError) -> Response {
    let status = status_for(&error);
    warn!(%error, status = status.as_u16(), "request rejected");
    (status, Json(ErrorResponse::new(status, error.to_string()))).into_response()
}
