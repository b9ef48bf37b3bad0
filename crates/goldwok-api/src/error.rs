//! # API Error Types
//!
//! Failures from the remote storefront service.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  fetch_combo_with_items(id)                                         │
//! │       │                                                             │
//! │       ├── transport failure ───────────► ApiError::Http             │
//! │       ├── HTTP 401 ────────────────────► ApiError::Unauthorized     │
//! │       ├── HTTP 404 ────────────────────► ApiError::NotFound         │
//! │       ├── other non-2xx ───────────────► ApiError::Server           │
//! │       └── body didn't parse ───────────► ApiError::InvalidResponse  │
//! │                                                                     │
//! │  Every failure is local: the session simply does not start and      │
//! │  the caller retries or reloads. No partial state is kept.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors from remote storefront API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The resource does not exist on the server.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request needs a (valid) bearer token.
    #[error("Authentication required")]
    Unauthorized,

    /// Any other non-success status from the server.
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
