//! Axum router wiring.
//!
//! Every route runs behind the request metrics middleware.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(ops::health))
        .route("/api/metrics", get(ops::metrics))
        .route("/api/products", get(api::products::list_products))
        .route("/api/products/:id", get(api::products::get_product))
        .route("/api/products/:id/images", get(api::products::product_images))
        .route("/api/events/order", post(api::events::order_placed))
        .route("/api/events/cart/:action", post(api::events::cart_action))
        .layer(middleware::from_fn_with_state(state.clone(), obs::track_requests))
        .with_state(state)
}
