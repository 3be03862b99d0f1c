//! Shared error type across Meo crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Requested record does not exist.
    NotFound,
    /// Record already exists.
    Conflict,
    /// Backing store unavailable or failed.
    StoreUnavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MeoError>;

/// Unified error type used by core and storefront.
#[derive(Debug, Error)]
pub enum MeoError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("store: {0}")]
    Store(String),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MeoError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MeoError::BadRequest(_) | MeoError::Config(_) => ClientCode::BadRequest,
            MeoError::NotFound(_) => ClientCode::NotFound,
            MeoError::Conflict(_) => ClientCode::Conflict,
            MeoError::Store(_) => ClientCode::StoreUnavailable,
            MeoError::Internal(_) => ClientCode::Internal,
        }
    }
}
