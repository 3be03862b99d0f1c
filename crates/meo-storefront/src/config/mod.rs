//! Storefront config loader (strict parsing + environment overrides).

pub mod schema;

use std::fs;
use std::path::Path;

use meo_core::error::{MeoError, Result};

pub use schema::{DatabaseSection, ImagesSection, ServerSection, ServiceSection, StorefrontConfig};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "MEO_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "meo.yaml";

pub fn load_from_file(path: &str) -> Result<StorefrontConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MeoError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<StorefrontConfig> {
    let cfg: StorefrontConfig = serde_yaml::from_str(s)
        .map_err(|e| MeoError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the process config from the real environment. See [`load_with`].
pub fn load() -> Result<StorefrontConfig> {
    load_with(|k| std::env::var(k).ok())
}

/// Load the config file named by `MEO_CONFIG`, then apply environment overrides.
///
/// A file named explicitly by `MEO_CONFIG` must exist. Without the variable,
/// `meo.yaml` is read when present and defaults are used otherwise.
pub fn load_with<F>(lookup: F) -> Result<StorefrontConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match lookup(CONFIG_PATH_ENV).filter(|p| !p.trim().is_empty()) {
        Some(path) => load_from_file(&path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        None => {
            tracing::info!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
            StorefrontConfig::default()
        }
    };

    apply_env_overrides(&mut cfg, lookup)?;
    Ok(cfg)
}

/// Apply deployment environment variables on top of `cfg` and re-validate.
///
/// `S3_BUCKET_URL` takes precedence over `NEXT_PUBLIC_S3_BUCKET_URL`.
pub fn apply_env_overrides<F>(cfg: &mut StorefrontConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

    if let Some(url) =
        non_empty("S3_BUCKET_URL").or_else(|| non_empty("NEXT_PUBLIC_S3_BUCKET_URL"))
    {
        cfg.images.bucket_url = Some(url);
    }
    if let Some(env) = non_empty("NODE_ENV") {
        cfg.service.environment = env;
    }
    if let Some(version) = non_empty("npm_package_version") {
        cfg.service.version = version;
    }
    if let Some(url) = non_empty("DATABASE_URL") {
        cfg.database.url = url;
    }

    cfg.validate()
}
