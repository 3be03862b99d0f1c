use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::obs::{track_cart_action, track_order, CartAction};

use super::ApiError;

#[derive(Debug, Deserialize)]
pub struct OrderEvent {
    /// Order total in the smallest currency unit.
    pub value: u64,
}

pub async fn order_placed(
    State(state): State<AppState>,
    Json(ev): Json<OrderEvent>,
) -> StatusCode {
    track_order(state.metrics(), ev.value as f64);
    StatusCode::NO_CONTENT
}

pub async fn cart_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
) -> Result<StatusCode, ApiError> {
    let action: CartAction = action.parse()?;
    track_cart_action(state.metrics(), action);
    Ok(StatusCode::NO_CONTENT)
}
