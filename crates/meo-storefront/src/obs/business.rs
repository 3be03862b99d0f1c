//! Business event counters (orders, product views, cart actions).

use std::fmt;
use std::str::FromStr;

use meo_core::error::MeoError;

use crate::obs::metrics::MetricsCollector;

/// Cart interactions the storefront tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Add,
    Remove,
    Checkout,
}

impl CartAction {
    pub fn as_str(self) -> &'static str {
        match self {
            CartAction::Add => "add",
            CartAction::Remove => "remove",
            CartAction::Checkout => "checkout",
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CartAction {
    type Err = MeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(CartAction::Add),
            "remove" => Ok(CartAction::Remove),
            "checkout" => Ok(CartAction::Checkout),
            other => Err(MeoError::BadRequest(format!("unknown cart action: {other}"))),
        }
    }
}

/// Record a placed order worth `value` (smallest currency unit).
///
/// `avg_order_value` holds the most recent order value, not a running mean.
pub fn track_order(metrics: &MetricsCollector, value: f64) {
    metrics.inc("orders_total");
    metrics.increment("revenue_total", value);
    metrics.gauge("avg_order_value", value);
    tracing::info!(value, "order tracked");
}

pub fn track_product_view(metrics: &MetricsCollector, product_id: &str) {
    metrics.inc(&format!("product_views_{product_id}"));
    metrics.inc("product_views_total");
}

pub fn track_cart_action(metrics: &MetricsCollector, action: CartAction) {
    metrics.inc(&format!("cart_{action}"));
    tracing::info!(%action, "cart action tracked");
}
