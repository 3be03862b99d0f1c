//! Lightweight in-process metrics.
//!
//! Metrics are kept in memory only and exposed as a JSON snapshot by the
//! `/api/metrics` handler. They reset on restart.

pub mod business;
pub mod instrument;
pub mod metrics;

pub use business::{track_cart_action, track_order, track_product_view, CartAction};
pub use instrument::{monitor_operation, track_requests};
pub use metrics::{MetricsCollector, MetricsSnapshot};
