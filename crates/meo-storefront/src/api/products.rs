use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use meo_core::catalog::Product;
use meo_core::error::MeoError;

use crate::app_state::AppState;
use crate::obs::{monitor_operation, track_product_view};

use super::ApiError;

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let store = state.store();
    let products = monitor_operation(state.metrics(), "product_list", store.list()).await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let store = state.store();
    let product = monitor_operation(state.metrics(), "product_get", store.get(&id))
        .await?
        .ok_or_else(|| MeoError::NotFound(format!("product {id}")))?;

    track_product_view(state.metrics(), &product.id);
    Ok(Json(product))
}

#[derive(Debug, Deserialize)]
pub struct ImagesQuery {
    pub max: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ProductImages {
    pub product_id: String,
    pub images: Vec<String>,
    pub placeholder: String,
}

/// Image URLs for a product, with `Link: rel=preload` hints for each.
pub async fn product_images(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(q): Query<ImagesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = state.cfg().images.max_per_product;
    let max = q.max.unwrap_or(limit);
    if max == 0 || max > limit {
        return Err(MeoError::BadRequest(format!("max must be between 1 and {limit}")).into());
    }

    let images = state.images().product_images(&id, max);

    let mut headers = HeaderMap::new();
    for url in &images {
        // URLs with characters invalid in a header value are skipped, not fatal.
        if let Ok(v) = HeaderValue::from_str(&format!("<{url}>; rel=preload; as=image")) {
            headers.append(header::LINK, v);
        }
    }

    let body = ProductImages {
        product_id: id,
        images,
        placeholder: state.cfg().images.placeholder.clone(),
    };
    Ok((headers, Json(body)))
}
