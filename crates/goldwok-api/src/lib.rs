//! # goldwok-api: Remote Storefront API Client
//!
//! Async client for the menu/order service. Owns every remote call the
//! storefront makes and the wire↔domain mapping, including the single
//! float→cents conversion and the combo id→rule table.
//!
//! ## Module Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          goldwok-api                                │
//! │                                                                     │
//! │  config    base URL, restaurant slug, timeout (env-overridable)     │
//! │  client    reqwest wrapper: scope param, bearer auth, status→error  │
//! │  wire      response DTOs + the float→cents boundary                 │
//! │  catalog   GET /combos, /combos/{id} → ComboDefinition + pool       │
//! │  menu      GET /menu, /menu/categories → domain menu types          │
//! │  orders    NewOrder builder + POST /orders                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures surface as [`ApiError`]; there is no retry or caching here.
//! Callers re-request, and the session layer holds no partial state on
//! failure.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod menu;
pub mod orders;
pub mod wire;

pub use catalog::{fetch_combo_with_items, fetch_combos};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use menu::{fetch_categories, fetch_menu};
pub use orders::{
    submit_order, CustomerInfo, NewOrder, OrderConfirmation, PaymentMethod, PaymentStatus,
};
