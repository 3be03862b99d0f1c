//! Catalog seed tool.
//!
//! Resets the `"Product"` table to the launch catalog. Exits non-zero on any
//! failure; the connection pool is closed on both paths.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use meo_core::error::Result;
use meo_storefront::store::{PgProductStore, ProductStore};
use meo_storefront::{config, seed};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    let store = match PgProductStore::connect(&cfg.database) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "error seeding database");
            return ExitCode::FAILURE;
        }
    };

    let outcome = seed_all(&store).await;
    store.close().await;

    match outcome {
        Ok(n) => {
            tracing::info!(products = n, "seed finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "error seeding database");
            ExitCode::FAILURE
        }
    }
}

async fn seed_all(store: &PgProductStore) -> Result<usize> {
    store.ensure_schema().await?;
    seed::run(store).await
}
