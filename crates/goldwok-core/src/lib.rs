//! # goldwok-core: Pure Business Logic for the Goldwok Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions and in-memory state machines with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Goldwok Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  Frontend (TypeScript)                        │  │
//! │  │   Menu UI ──► Combo Selector ──► Cart UI ──► Checkout UI     │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │             ★ goldwok-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌──────┐ ┌──────────┐  │  │
//! │  │  │ catalog │ │selection │ │ pricing │ │ cart │ │  money   │  │  │
//! │  │  │ Combo   │ │ Combo    │ │ Linear  │ │ Cart │ │  Money   │  │  │
//! │  │  │ defs    │ │ Session  │ │ Ladder  │ │ Line │ │  TaxRate │  │  │
//! │  │  └─────────┘ └──────────┘ └─────────┘ └──────┘ └──────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                        │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │        goldwok-api (remote calls) / goldwok-session           │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cents arithmetic (no floating point!)
//! - [`catalog`] - Combo definitions with explicit selection rules
//! - [`pricing`] - Linear and ladder pricing strategies
//! - [`selection`] - The combo customization session engine
//! - [`cart`] - Cart aggregation with frozen prices
//! - [`order`] - Order-submission line projection
//! - [`menu`] - Ordinary menu items and categories
//! - [`validation`] - Checkout input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure logic**: deterministic, fully testable without mocks
//! 2. **No I/O**: network and file system access live in the sibling crates
//! 3. **Integer money**: all monetary values are cents (i64)
//! 4. **Explicit outcomes**: rejected actions return typed outcomes, never
//!    panics
//!
//! ## Example
//!
//! ```rust
//! use goldwok_core::catalog::{ComboDefinition, ComboId, ComboItem, ItemId, SelectionRule};
//! use goldwok_core::money::Money;
//! use goldwok_core::pricing::PricingStrategy;
//! use goldwok_core::selection::ComboSession;
//!
//! let definition = ComboDefinition {
//!     id: ComboId(1),
//!     name: "Combination for One".to_string(),
//!     description: None,
//!     bundled_spring_rolls: 1,
//!     selection: SelectionRule::Straight { included_items: 3, bundled_items: 1 },
//!     pricing: PricingStrategy::Ladder {
//!         included_price: Money::from_cents(1795),
//!         included_items: 2,
//!         step_price: Money::from_cents(2095),
//!         extra_item_price: Money::from_cents(700),
//!     },
//! };
//! let pool = vec![
//!     ComboItem { id: ItemId(11), name: "Ginger Beef".into(), description: None, is_entree: true },
//!     ComboItem { id: ItemId(12), name: "Lemon Chicken".into(), description: None, is_entree: true },
//! ];
//!
//! let mut session = ComboSession::new(definition, pool);
//! session.toggle_entree(ItemId(11));
//! session.toggle_entree(ItemId(12));
//!
//! assert!(session.is_complete());
//! assert_eq!(session.total(), Money::from_cents(1795));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod pricing;
pub mod selection;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use goldwok_core::Money` instead of
// `use goldwok_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals, FulfillmentType, LineKind};
pub use catalog::{ComboDefinition, ComboId, ComboItem, ItemId, SelectionRule};
pub use error::{CoreError, CoreResult, SelectionError, ValidationError};
pub use menu::{Category, MenuByCategory, MenuItem};
pub use money::{Money, TaxRate};
pub use order::{order_lines, OrderLine};
pub use pricing::PricingStrategy;
pub use selection::{ComboSession, FinalizedSelection, Missing, RejectReason, Toggle};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Order tax in basis points: 12% BC PST + GST, applied to the subtotal
/// at checkout.
pub const ORDER_TAX_BPS: u32 = 1200;

/// Flat delivery fee in cents ($3.99); pickup orders pay nothing.
pub const DELIVERY_FEE_CENTS: i64 = 399;

/// Maximum quantity of a single line in the cart.
///
/// Guards against accidental over-ordering (typing 100 instead of 10) at
/// the checkout validation boundary.
pub const MAX_ITEM_QUANTITY: i64 = 999;
