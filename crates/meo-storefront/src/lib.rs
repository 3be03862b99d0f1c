//! Meo Stationery storefront library entry.
//!
//! This crate wires the config, product store, metrics, and HTTP handlers into
//! the storefront service. It is consumed by the server binary (`main.rs`), the
//! seed tool (`bin/meo-seed.rs`), and integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod seed;
pub mod store;
