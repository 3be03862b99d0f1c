//! Meo core: transport-agnostic storefront primitives and error types.
//!
//! This crate defines the product model, the object-store image URL rules, and
//! the error surface shared by the storefront service and its tooling. It
//! intentionally carries no HTTP or database dependencies so it can be reused by
//! the server, the seed tool, and tests alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MeoError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod images;

/// Shared result type.
pub use error::{MeoError, Result};
