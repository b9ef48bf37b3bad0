//! # Storefront Session
//!
//! The stateful facade the frontend drives: catalog cache, combo
//! customization entry points, cart mutations with snapshot persistence,
//! and order building.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Storefront::new(client, store)      restore cart snapshot          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  load_catalog()                      combos + menu + categories     │
//! │       │                                                             │
//! │       ├── begin_combo(id) ──► ComboSession ──► add_combo_to_cart    │
//! │       ├── add_item / remove_item / remove_line / clear_cart         │
//! │       │        (every mutation snapshots through the store hook)    │
//! │       ▼                                                             │
//! │  build_order(...) ──► NewOrder ──► submit_order ──► cart cleared    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog loads are all-or-nothing: a failed fetch leaves the previous
//! cache untouched and surfaces the error to the caller.

use tracing::{debug, info, warn};

use goldwok_api::{
    fetch_categories, fetch_combo_with_items, fetch_combos, fetch_menu, submit_order, ApiClient,
    CustomerInfo, NewOrder, OrderConfirmation, PaymentMethod,
};
use goldwok_core::cart::{Cart, CartTotals, FulfillmentType};
use goldwok_core::catalog::{ComboDefinition, ComboId, ItemId};
use goldwok_core::menu::{category_items, Category, MenuByCategory, MenuItem};
use goldwok_core::selection::ComboSession;

use crate::error::SessionResult;
use crate::state::CartState;
use crate::store::CartStore;

/// One customer's storefront session.
pub struct Storefront {
    client: ApiClient,
    cart: CartState,
    store: Box<dyn CartStore>,
    combos: Vec<ComboDefinition>,
    menu: MenuByCategory,
    categories: Vec<Category>,
}

impl Storefront {
    /// Opens a session, restoring the cart from the store's snapshot.
    ///
    /// A failing store is downgraded to an empty cart: persistence is a
    /// convenience, not a requirement for ordering.
    pub fn new(client: ApiClient, store: Box<dyn CartStore>) -> Self {
        let cart = match store.load() {
            Ok(Some(cart)) => {
                info!(lines = cart.line_count(), "restored cart from snapshot");
                CartState::from_cart(cart)
            }
            Ok(None) => CartState::new(),
            Err(err) => {
                warn!(error = %err, "cart snapshot unavailable, starting empty");
                CartState::new()
            }
        };

        Storefront {
            client,
            cart,
            store,
            combos: Vec::new(),
            menu: MenuByCategory::new(),
            categories: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// Loads combos, menu, and categories from the remote service.
    ///
    /// Assigns the cache only after every fetch succeeds; on failure the
    /// previous cache (possibly empty) stays as-is.
    pub async fn load_catalog(&mut self) -> SessionResult<()> {
        let combos = fetch_combos(&self.client).await?;
        let menu = fetch_menu(&self.client).await?;
        let categories = fetch_categories(&self.client).await?;

        info!(
            combos = combos.len(),
            menu_categories = menu.len(),
            "catalog loaded"
        );
        self.combos = combos;
        self.menu = menu;
        self.categories = categories;
        Ok(())
    }

    /// Cached combo list.
    pub fn combos(&self) -> &[ComboDefinition] {
        &self.combos
    }

    /// Cached menu categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Cached menu items for a category.
    pub fn category_items(&self, category_id: i64) -> &[MenuItem] {
        category_items(&self.menu, category_id)
    }

    /// Starts a combo customization session.
    ///
    /// Fetches the combo and its pool fresh so the selector always works
    /// from current availability; a fetch failure means the session simply
    /// does not start.
    pub async fn begin_combo(&self, id: ComboId) -> SessionResult<ComboSession> {
        let (definition, pool) = fetch_combo_with_items(&self.client, id).await?;
        debug!(combo = %definition.id, pool = pool.len(), "combo session started");
        Ok(ComboSession::new(definition, pool))
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Finalizes a combo session into a cart line.
    ///
    /// Fails with the selection's missing requirements when it is not yet
    /// complete. Returns the new line id.
    pub fn add_combo_to_cart(&self, session: &ComboSession) -> SessionResult<String> {
        let finalized = session.finalize()?;
        let line_id = self
            .cart
            .with_cart_mut(|cart| cart.add_combo(finalized, session.definition()));
        debug!(%line_id, "combo added to cart");
        self.persist()?;
        Ok(line_id)
    }

    /// Adds an ordinary menu item (merging quantities by catalog id).
    pub fn add_item(&self, item: &MenuItem) -> SessionResult<()> {
        self.cart.with_cart_mut(|cart| cart.add_item(item));
        self.persist()
    }

    /// Removes one unit of an ordinary item.
    pub fn remove_item(&self, item_id: ItemId) -> SessionResult<()> {
        self.cart.with_cart_mut(|cart| cart.remove_item(item_id));
        self.persist()
    }

    /// Drops a line entirely regardless of quantity.
    pub fn remove_line(&self, line_id: &str) -> SessionResult<()> {
        self.cart.with_cart_mut(|cart| cart.remove_line(line_id));
        self.persist()
    }

    /// Bumps any line's quantity by one.
    pub fn increment_line(&self, line_id: &str) -> SessionResult<()> {
        self.cart.with_cart_mut(|cart| cart.increment_line(line_id));
        self.persist()
    }

    /// Removes one unit of any line.
    pub fn decrement_line(&self, line_id: &str) -> SessionResult<()> {
        self.cart.with_cart_mut(|cart| cart.decrement_line(line_id));
        self.persist()
    }

    /// Empties the cart and drops the snapshot.
    pub fn clear_cart(&self) -> SessionResult<()> {
        self.cart.with_cart_mut(|cart| cart.clear());
        self.store.clear()?;
        Ok(())
    }

    /// A copy of the current cart (for display).
    pub fn cart(&self) -> Cart {
        self.cart.with_cart(|cart| cart.clone())
    }

    /// Quantity of an ordinary item currently in the cart.
    pub fn item_quantity(&self, item_id: ItemId) -> i64 {
        self.cart.with_cart(|cart| cart.item_quantity(item_id))
    }

    /// Checkout totals under the given fulfillment type.
    pub fn totals(&self, fulfillment: FulfillmentType) -> CartTotals {
        self.cart
            .with_cart(|cart| CartTotals::compute(cart, fulfillment))
    }

    fn persist(&self) -> SessionResult<()> {
        let snapshot = self.cart.with_cart(|cart| cart.clone());
        self.store.save(&snapshot)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Builds an order submission from the current cart.
    pub fn build_order(
        &self,
        customer: &CustomerInfo,
        fulfillment: FulfillmentType,
        payment_method: PaymentMethod,
        user_id: Option<String>,
        notes: Option<String>,
    ) -> SessionResult<NewOrder> {
        let order = self.cart.with_cart(|cart| {
            NewOrder::build(cart, customer, fulfillment, payment_method, user_id, notes)
        })?;
        Ok(order)
    }

    /// Submits the order; on success the cart (and its snapshot) is
    /// cleared for the next one.
    pub async fn submit_order(&self, order: &NewOrder) -> SessionResult<OrderConfirmation> {
        let confirmation = submit_order(&self.client, order).await?;
        info!(order_id = confirmation.id, "order created");
        self.clear_cart()?;
        Ok(confirmation)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
