//! Meo Stationery storefront server.
//!
//! - Catalog API under /api/products
//! - Business event intake under /api/events
//! - /api/health and /api/metrics for operations
//! - Request metrics on every route, graceful shutdown on Ctrl+C / SIGTERM

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use meo_storefront::store::{PgProductStore, ProductStore};
use meo_storefront::{app_state, config, router};

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
    let listen: SocketAddr = match cfg.server.listen.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(
                listen = %cfg.server.listen,
                error = %e,
                "server.listen must be a valid SocketAddr"
            );
            return ExitCode::FAILURE;
        }
    };

    let store = match PgProductStore::connect(&cfg.database) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(error = %e, "product store init failed");
            return ExitCode::FAILURE;
        }
    };

    let state = app_state::AppState::new(cfg, store.clone());
    let app = router::build_router(state);

    tracing::info!(%listen, "meo-storefront starting");
    let listener = match tokio::net::TcpListener::bind(listen).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%listen, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    store.close().await;

    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
