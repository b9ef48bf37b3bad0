//! # Cart Snapshot Store
//!
//! The persistence hook for the cart. The browser build of this storefront
//! keeps the cart in localStorage, snapshotting after every change and
//! restoring on load; [`JsonCartStore`] mirrors that with a JSON file in
//! the per-user data directory.
//!
//! ## Snapshot Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  session start ──► load() ──► Some(cart) restore / None fresh cart  │
//! │                                                                     │
//! │  every cart mutation ──► save(&cart)                                │
//! │                                                                     │
//! │  order submitted / explicit clear ──► clear()                       │
//! │                                                                     │
//! │  Unreadable snapshot → warn + fresh cart. Never fatal: the cart     │
//! │  is a convenience cache, not a system of record.                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{debug, warn};

use goldwok_core::cart::Cart;

use crate::error::StoreError;

// =============================================================================
// Store Trait
// =============================================================================

/// Persistence hook for the session cart.
///
/// The core never sees this; only [`crate::Storefront`] drives it, once
/// after every mutation.
pub trait CartStore: Send + Sync {
    /// Restores the last snapshot, `None` when there is none (or it is
    /// unreadable).
    fn load(&self) -> Result<Option<Cart>, StoreError>;

    /// Replaces the snapshot with the current cart.
    fn save(&self, cart: &Cart) -> Result<(), StoreError>;

    /// Removes the snapshot entirely.
    fn clear(&self) -> Result<(), StoreError>;
}

// =============================================================================
// JSON File Store
// =============================================================================

/// File-backed snapshot store (the localStorage analog).
#[derive(Debug)]
pub struct JsonCartStore {
    path: PathBuf,
}

impl JsonCartStore {
    /// Store backed by an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        JsonCartStore { path: path.into() }
    }

    /// Store under the per-user data directory
    /// (e.g. `~/.local/share/goldwok/cart.json`).
    pub fn in_user_data_dir() -> Result<Self, StoreError> {
        let dirs = directories::ProjectDirs::from("com", "goldwok", "goldwok")
            .ok_or(StoreError::NoDataDir)?;
        Ok(JsonCartStore {
            path: dirs.data_dir().join("cart.json"),
        })
    }

    /// Where the snapshot lives.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CartStore for JsonCartStore {
    fn load(&self) -> Result<Option<Cart>, StoreError> {
        let body = match fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&body) {
            Ok(cart) => {
                debug!(path = %self.path.display(), "restored cart snapshot");
                Ok(Some(cart))
            }
            Err(err) => {
                // A corrupt snapshot resets the cart rather than blocking
                // the session.
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "cart snapshot unreadable, starting with an empty cart"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string(cart)?;
        fs::write(&self.path, body)?;
        debug!(path = %self.path.display(), lines = cart.line_count(), "saved cart snapshot");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Snapshot store that lives only for the process; for tests and embedders
/// that opt out of persistence.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    snapshot: Mutex<Option<Cart>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        MemoryCartStore::default()
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<Option<Cart>, StoreError> {
        Ok(self.snapshot.lock().expect("store mutex poisoned").clone())
    }

    fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        *self.snapshot.lock().expect("store mutex poisoned") = Some(cart.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.snapshot.lock().expect("store mutex poisoned") = None;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
