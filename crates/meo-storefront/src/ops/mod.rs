//! Operational HTTP endpoints.
//!
//! - `/api/health`  : static status document (no live dependency checks)
//! - `/api/metrics` : JSON snapshot of the in-process metrics

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use meo_core::error::{MeoError, Result};

use crate::app_state::AppState;
use crate::config::ServiceSection;

/// Body of a healthy `/api/health` response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub service: String,
    pub version: String,
    pub environment: String,
    pub database: &'static str,
    pub s3: &'static str,
}

impl HealthStatus {
    /// Build the status document. `database`/`s3` are reported, not checked.
    pub fn collect(service: &ServiceSection) -> Self {
        Self {
            status: "healthy",
            timestamp: now_iso8601(),
            service: service.name.clone(),
            version: service.version.clone(),
            environment: service.environment.clone(),
            database: "connected",
            s3: "configured",
        }
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub async fn health(State(state): State<AppState>) -> Response {
    health_response(|| {
        serde_json::to_value(HealthStatus::collect(&state.cfg().service))
            .map_err(|e| MeoError::Internal(format!("health encode failed: {e}")))
    })
}

/// Run `check` and shape its outcome as a health response: 200 with the
/// document, or 500 with `{status: "unhealthy", error, timestamp}`.
pub fn health_response<F>(check: F) -> Response
where
    F: FnOnce() -> Result<Value>,
{
    match check() {
        Ok(doc) => (StatusCode::OK, Json(doc)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "unhealthy",
                    "error": e.to_string(),
                    "timestamp": now_iso8601(),
                })),
            )
                .into_response()
        }
    }
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics().snapshot())
}
