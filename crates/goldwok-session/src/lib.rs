//! # goldwok-session: Storefront Session Layer
//!
//! Stateful glue between the pure core and the remote API: the session
//! cart with its persistence hook, the catalog cache, and the checkout
//! entry points.
//!
//! ## Module Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        goldwok-session                              │
//! │                                                                     │
//! │  state       CartState: Arc<Mutex<Cart>> with scoped accessors      │
//! │  store       CartStore hook + JSON-file / in-memory impls           │
//! │  storefront  Storefront: catalog, combo sessions, cart, checkout    │
//! │  error       SessionError / StoreError                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use goldwok_api::{ApiClient, ApiConfig};
//! use goldwok_core::catalog::{ComboId, ItemId};
//! use goldwok_session::{JsonCartStore, Storefront};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! goldwok_session::init_tracing();
//!
//! let client = ApiClient::new(ApiConfig::from_env())?;
//! let store = JsonCartStore::in_user_data_dir()?;
//! let mut storefront = Storefront::new(client, Box::new(store));
//!
//! storefront.load_catalog().await?;
//!
//! let mut session = storefront.begin_combo(ComboId(1)).await?;
//! session.toggle_entree(ItemId(11));
//! session.toggle_entree(ItemId(12));
//! storefront.add_combo_to_cart(&session)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod state;
pub mod store;
pub mod storefront;

pub use error::{SessionError, SessionResult, StoreError};
pub use state::CartState;
pub use store::{CartStore, JsonCartStore, MemoryCartStore};
pub use storefront::Storefront;

/// Installs a tracing subscriber filtered by `RUST_LOG`.
///
/// Defaults to `info` overall with `debug` for the goldwok crates.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,goldwok_core=debug,goldwok_api=debug,goldwok_session=debug")
    });

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
