//! Metric instrumentation around HTTP requests and store operations.

use std::fmt::Display;
use std::future::Future;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;
use crate::obs::metrics::MetricsCollector;

/// Requests slower than this are logged at warn level.
pub const SLOW_REQUEST_THRESHOLD_MS: u128 = 1000;

/// Axum middleware recording per-request counters and response-time gauges.
///
/// Emits `requests_total`, `requests_total_{path}`, `response_time_{path}`,
/// `response_time_avg` (last observed value) and `status_{code}`.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let started = Instant::now();
    let path = req.uri().path().to_string();
    let metrics = state.metrics();

    metrics.inc(&format!("requests_total_{path}"));
    metrics.inc("requests_total");

    let response = next.run(req).await;

    let elapsed = started.elapsed().as_millis();
    record_completion(metrics, &path, response.status().as_u16(), elapsed);
    response
}

fn record_completion(metrics: &MetricsCollector, path: &str, status: u16, elapsed_ms: u128) {
    let elapsed = elapsed_ms as f64;
    metrics.gauge(&format!("response_time_{path}"), elapsed);
    metrics.gauge("response_time_avg", elapsed);

    if elapsed_ms > SLOW_REQUEST_THRESHOLD_MS {
        tracing::warn!(%path, duration_ms = elapsed_ms, "slow request detected");
    }

    metrics.inc(&format!("status_{status}"));
}

/// Stops a pending timer when dropped, so cancelled or panicking work still
/// clears it.
struct TimerGuard<'a> {
    metrics: &'a MetricsCollector,
    name: String,
}

impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        self.metrics.end_timer(&self.name);
    }
}

/// Run a store operation under the `db_{operation}` timer.
///
/// Counts `db_{operation}_success` or `db_{operation}_error`; the timer is
/// stopped on every exit path, including the future being dropped mid-flight.
/// Errors are returned unchanged after being logged.
pub async fn monitor_operation<T, E, Fut>(
    metrics: &MetricsCollector,
    operation: &str,
    work: Fut,
) -> std::result::Result<T, E>
where
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Display,
{
    let timer = TimerGuard { metrics, name: format!("db_{operation}") };
    metrics.start_timer(&timer.name);

    let result = work.await;
    match &result {
        Ok(_) => metrics.inc(&format!("db_{operation}_success")),
        Err(e) => {
            metrics.inc(&format!("db_{operation}_error"));
            tracing::error!(%operation, error = %e, "database error");
        }
    }

    drop(timer);
    result
}
