//! # Session Error Types
//!
//! One umbrella for everything a storefront session can surface, plus the
//! snapshot store's own error.

use thiserror::Error;

use goldwok_api::ApiError;
use goldwok_core::error::{SelectionError, ValidationError};

/// Failures surfaced by [`crate::Storefront`] operations.
///
/// Nothing here is fatal: catalog loads can be retried, selection errors
/// send the user back to the selector, and store errors leave the
/// in-memory cart intact.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Remote call failed; the session holds no partial state.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Combo customization precondition failed.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Checkout input rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Cart snapshot could not be written or read.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures from the cart snapshot store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Snapshot file could not be read or written.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No per-user data directory on this platform.
    #[error("no user data directory available")]
    NoDataDir,

    /// Cart could not be serialized.
    #[error("snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
