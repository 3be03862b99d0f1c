//! End-to-end router tests over the in-memory store.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use meo_core::catalog::Product;
use meo_core::error::{MeoError, Result};
use meo_storefront::app_state::AppState;
use meo_storefront::config::StorefrontConfig;
use meo_storefront::ops::health_response;
use meo_storefront::router::build_router;
use meo_storefront::seed;
use meo_storefront::store::{MemoryProductStore, ProductStore};

async fn seeded_app(bucket: Option<&str>) -> (Router, AppState) {
    let store = Arc::new(MemoryProductStore::new());
    seed::run(store.as_ref()).await.unwrap();

    let mut cfg = StorefrontConfig::default();
    cfg.images.bucket_url = bucket.map(str::to_string);
    let state = AppState::new(cfg, store);
    (build_router(state.clone()), state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(b.to_string())
        }
        None => Body::empty(),
    };
    app.clone().oneshot(req.body(body).unwrap()).await.unwrap()
}

async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_static_document() {
    let (app, _) = seeded_app(None).await;
    let resp = send(&app, "GET", "/api/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let v = json_body(resp).await;
    assert_eq!(v["status"], "healthy");
    assert_eq!(v["service"], "meo-stationery");
    assert_eq!(v["environment"], "development");
    assert_eq!(v["database"], "connected");
    assert_eq!(v["s3"], "configured");
    assert!(!v["version"].as_str().unwrap().is_empty());

    let ts = v["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "timestamp must be ISO-8601: {ts}");
}

#[tokio::test]
async fn health_failure_is_structured_500() {
    let resp = health_response(|| Err(MeoError::Internal("clock unavailable".into())));
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let v = json_body(resp).await;
    assert_eq!(v["status"], "unhealthy");
    assert!(v["error"].as_str().unwrap().contains("clock unavailable"));
    assert!(v["timestamp"].is_string());
}

#[tokio::test]
async fn requests_are_counted_per_path_and_status() {
    let (app, state) = seeded_app(None).await;
    send(&app, "GET", "/api/health", None).await;
    send(&app, "GET", "/api/health", None).await;
    send(&app, "GET", "/api/products/Q", None).await;

    let m = state.metrics();
    assert_eq!(m.get("requests_total"), Some(3.0));
    assert_eq!(m.get("requests_total_/api/health"), Some(2.0));
    assert_eq!(m.get("requests_total_/api/products/Q"), Some(1.0));
    assert_eq!(m.get("status_200"), Some(2.0));
    assert_eq!(m.get("status_404"), Some(1.0));
    assert!(m.get("response_time_/api/health").is_some());
    assert!(m.get("response_time_avg").is_some());
}

#[tokio::test]
async fn lists_seeded_products_with_store_metrics() {
    let (app, state) = seeded_app(None).await;
    let resp = send(&app, "GET", "/api/products", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let v = json_body(resp).await;
    let items = v.as_array().unwrap();
    assert_eq!(items.len(), 15);
    assert_eq!(items[0]["id"], "A");
    assert_eq!(items[0]["price"], 15000);

    assert_eq!(state.metrics().get("db_product_list_success"), Some(1.0));
    assert!(state.metrics().get("db_product_list_duration_ms").is_some());
}

#[tokio::test]
async fn product_lookup_tracks_views() {
    let (app, state) = seeded_app(None).await;
    let resp = send(&app, "GET", "/api/products/J", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["name"], "Leather Bound Journal");

    let resp = send(&app, "GET", "/api/products/I", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["code"], "NOT_FOUND");

    let m = state.metrics();
    assert_eq!(m.get("product_views_J"), Some(1.0));
    assert_eq!(m.get("product_views_total"), Some(1.0));
    assert_eq!(m.get("db_product_get_success"), Some(2.0));
}

#[tokio::test]
async fn product_images_resolve_against_bucket() {
    let (app, _) = seeded_app(Some("https://cdn.example.com")).await;
    let resp = send(&app, "GET", "/api/products/A/images?max=2", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let links: Vec<String> = resp
        .headers()
        .get_all(header::LINK)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert_eq!(
        links,
        [
            "<https://cdn.example.com/products/A/0.jpg>; rel=preload; as=image",
            "<https://cdn.example.com/products/A/1.jpg>; rel=preload; as=image",
        ]
    );

    let v = json_body(resp).await;
    assert_eq!(v["images"][1], "https://cdn.example.com/products/A/1.jpg");
    assert_eq!(v["placeholder"], "/placeholder.jpg");
}

#[tokio::test]
async fn product_images_default_and_bounds() {
    let (app, _) = seeded_app(None).await;
    let v = json_body(send(&app, "GET", "/api/products/B/images", None).await).await;
    let images = v["images"].as_array().unwrap();
    assert_eq!(images.len(), 10);
    assert_eq!(images[0], "/products/B/0.jpg");

    let resp = send(&app, "GET", "/api/products/B/images?max=0", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let resp = send(&app, "GET", "/api/products/B/images?max=11", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn business_events_update_metrics() {
    let (app, state) = seeded_app(None).await;

    let resp = send(&app, "POST", "/api/events/order", Some(r#"{"value":25000}"#)).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = send(&app, "POST", "/api/events/cart/add", None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = send(&app, "POST", "/api/events/cart/refund", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let m = state.metrics();
    assert_eq!(m.get("orders_total"), Some(1.0));
    assert_eq!(m.get("revenue_total"), Some(25000.0));
    assert_eq!(m.get("avg_order_value"), Some(25000.0));
    assert_eq!(m.get("cart_add"), Some(1.0));
    assert_eq!(m.get("cart_refund"), None);
}

#[tokio::test]
async fn metrics_endpoint_returns_snapshot() {
    let (app, _) = seeded_app(None).await;
    send(&app, "GET", "/api/health", None).await;

    let v = json_body(send(&app, "GET", "/api/metrics", None).await).await;
    assert_eq!(v["requests_total_/api/health"].as_f64(), Some(1.0));
    assert_eq!(v["status_200"].as_f64(), Some(1.0));
    // the metrics request itself is counted before the snapshot is taken
    assert_eq!(v["requests_total"].as_f64(), Some(2.0));
}

struct DownStore;

#[async_trait]
impl ProductStore for DownStore {
    async fn delete_all(&self) -> Result<u64> {
        Err(MeoError::Store("connection refused".into()))
    }
    async fn create(&self, _product: &Product) -> Result<()> {
        Err(MeoError::Store("connection refused".into()))
    }
    async fn list(&self) -> Result<Vec<Product>> {
        Err(MeoError::Store("connection refused".into()))
    }
    async fn get(&self, _id: &str) -> Result<Option<Product>> {
        Err(MeoError::Store("connection refused".into()))
    }
}

#[tokio::test]
async fn store_failure_is_counted_and_surfaced() {
    let state = AppState::new(StorefrontConfig::default(), Arc::new(DownStore));
    let app = build_router(state.clone());

    let resp = send(&app, "GET", "/api/products", None).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let v = json_body(resp).await;
    assert_eq!(v["code"], "STORE_UNAVAILABLE");

    let m = state.metrics();
    assert_eq!(m.get("db_product_list_error"), Some(1.0));
    assert_eq!(m.get("status_503"), Some(1.0));
    assert!(!m.has_pending_timer("db_product_list"));
}
