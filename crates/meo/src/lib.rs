//! Top-level facade crate for the Meo Stationery storefront.
//!
//! Re-exports the core types and the storefront library so users can depend on a single crate.

pub mod core {
    pub use meo_core::*;
}

pub mod storefront {
    pub use meo_storefront::*;
}
