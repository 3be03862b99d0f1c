//! Shared application state for the storefront.
//!
//! Owns the metrics registry, the injected product store, and the image URL
//! resolver. Built once at startup and cloned cheaply into every handler.

use std::sync::Arc;

use meo_core::images::ImageResolver;

use crate::config::StorefrontConfig;
use crate::obs::MetricsCollector;
use crate::store::ProductStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<MetricsCollector>,
    store: Arc<dyn ProductStore>,
}

struct AppStateInner {
    cfg: StorefrontConfig,
    images: ImageResolver,
}

impl AppState {
    pub fn new(cfg: StorefrontConfig, store: Arc<dyn ProductStore>) -> Self {
        let images = ImageResolver::new(cfg.images.bucket_url.as_deref());
        if images.base_url().is_none() {
            tracing::warn!("images.bucket_url not configured, product images use local paths");
        }

        Self {
            inner: Arc::new(AppStateInner { cfg, images }),
            metrics: Arc::new(MetricsCollector::new()),
            store,
        }
    }

    pub fn cfg(&self) -> &StorefrontConfig {
        &self.inner.cfg
    }

    pub fn images(&self) -> &ImageResolver {
        &self.inner.images
    }

    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    pub fn store(&self) -> Arc<dyn ProductStore> {
        Arc::clone(&self.store)
    }
}
