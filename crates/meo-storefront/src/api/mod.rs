//! Storefront JSON API: catalog reads and business event intake.

pub mod error;
pub mod events;
pub mod products;

pub use error::ApiError;
