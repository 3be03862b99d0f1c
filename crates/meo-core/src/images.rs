//! Object-store image URL rules.
//!
//! Product images live in the bucket under `products/{id}/{index}.jpg`. Local
//! paths (as referenced by the storefront, optionally prefixed with `/` or
//! `public/`) are mapped onto the configured bucket base URL. Without a base URL
//! the local path is used as-is.

/// Default image shown when a product image cannot be loaded.
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder.jpg";

/// Default number of image slots per product.
pub const DEFAULT_MAX_IMAGES: usize = 10;

/// Maps local image paths onto the object-store base URL.
#[derive(Debug, Clone, Default)]
pub struct ImageResolver {
    base_url: Option<String>,
}

impl ImageResolver {
    /// `base_url` is trimmed of trailing slashes; empty strings count as unset.
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .map(str::to_string);
        Self { base_url }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Resolve a local path to its object-store URL.
    pub fn resolve(&self, local_path: &str) -> String {
        let Some(base) = &self.base_url else {
            tracing::warn!(path = %local_path, "object store base url not set, using local path");
            return local_path.to_string();
        };

        format!("{}/{}", base, strip_local_prefix(local_path))
    }

    /// URL of image `index` for product `product_id`.
    pub fn product_image_url(&self, product_id: &str, index: usize) -> String {
        self.resolve(&product_image_path(product_id, index))
    }

    /// URLs of the first `max_images` image slots for a product.
    pub fn product_images(&self, product_id: &str, max_images: usize) -> Vec<String> {
        (0..max_images)
            .map(|i| self.product_image_url(product_id, i))
            .collect()
    }
}

/// Local path convention for product images.
pub fn product_image_path(product_id: &str, index: usize) -> String {
    format!("/products/{product_id}/{index}.jpg")
}

// "/public/x" -> "x", "public/x" -> "x", "/x" -> "x"
fn strip_local_prefix(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_prefix("public/").unwrap_or(path)
}

/// Display source that falls back to a placeholder on the first load failure.
///
/// Mirrors what an image widget does on `onerror`: swap once, never retry, and
/// never swap again if the placeholder itself fails.
#[derive(Debug, Clone)]
pub struct FallbackImage {
    current: String,
    fallback: String,
    failed: bool,
}

impl FallbackImage {
    pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            current: src.into(),
            fallback: fallback.into(),
            failed: false,
        }
    }

    /// Source for product image `index`, falling back to `placeholder`.
    pub fn for_product(
        resolver: &ImageResolver,
        product_id: &str,
        index: usize,
        placeholder: &str,
    ) -> Self {
        Self::new(resolver.product_image_url(product_id, index), placeholder)
    }

    /// Source the display should currently load.
    pub fn src(&self) -> &str {
        &self.current
    }

    pub fn is_fallback(&self) -> bool {
        self.failed
    }

    /// Report a load failure of the current source.
    /// Returns `true` only when this call swapped to the fallback.
    pub fn on_error(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        self.current = self.fallback.clone();
        true
    }
}
