//! In-process metrics registry for the storefront.
//!
//! Counters and gauges share one name -> value map; the kind is implied by the
//! operation used to write it (`increment` accumulates, `gauge` overwrites).
//! Timers live in a second map keyed by name and are consumed by `end_timer`,
//! which turns them into a `{name}_duration_ms` gauge.
//!
//! Both maps are `DashMap`s, so a single key is updated under its shard lock and
//! concurrent increments of the same metric are not lost. A snapshot taken while
//! writers are active is not atomic across keys.

use std::collections::BTreeMap;
use std::time::Instant;

use dashmap::DashMap;

/// Point-in-time copy of all counter and gauge values, ordered by name.
pub type MetricsSnapshot = BTreeMap<String, f64>;

#[derive(Default)]
pub struct MetricsCollector {
    values: DashMap<String, f64>,
    timers: DashMap<String, Instant>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment a counter by 1.
    pub fn inc(&self, name: &str) {
        self.increment(name, 1.0);
    }

    /// Add `amount` to a counter, starting from 0 when absent.
    pub fn increment(&self, name: &str, amount: f64) {
        let total = {
            let mut entry = self.values.entry(name.to_string()).or_insert(0.0);
            *entry += amount;
            *entry
        };
        tracing::info!(metric = %name, value = total, "metric incremented");
    }

    /// Overwrite a gauge value.
    pub fn gauge(&self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
        tracing::info!(metric = %name, value, "metric gauge set");
    }

    /// Start (or restart) the timer `name`.
    pub fn start_timer(&self, name: &str) {
        self.timers.insert(name.to_string(), Instant::now());
    }

    /// Finish the timer `name` and record `{name}_duration_ms`.
    /// A timer that was never started is ignored.
    pub fn end_timer(&self, name: &str) {
        let Some((_, started)) = self.timers.remove(name) else {
            return;
        };
        let duration_ms = started.elapsed().as_millis() as f64;
        self.gauge(&format!("{name}_duration_ms"), duration_ms);
        tracing::info!(timer = %name, duration_ms, "timer completed");
    }

    /// Current value of a single metric.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).map(|v| *v.value())
    }

    pub fn has_pending_timer(&self, name: &str) -> bool {
        self.timers.contains_key(name)
    }

    /// Copy of all counter and gauge values.
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.values
            .iter()
            .map(|r| (r.key().clone(), *r.value()))
            .collect()
    }

    /// Drop every metric and pending timer. Meant for test isolation.
    pub fn reset(&self) {
        self.values.clear();
        self.timers.clear();
    }
}
