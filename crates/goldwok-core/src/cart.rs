//! # Cart Aggregation
//!
//! The shopping cart: ordinary menu items with merge/decrement quantity
//! semantics, and combo lines that never merge.
//!
//! ## Line identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Ordinary item   line_id = catalog item id                          │
//! │                  same id added twice → one line, quantity 2         │
//! │                                                                     │
//! │  Combo           line_id = "combo-{comboId}-{millis}"               │
//! │                  every finalized customization is its own line,     │
//! │                  even when the selections are identical: price      │
//! │                  can depend on selection order, and equality over   │
//! │                  free-form selections is not attempted              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Ordinary lines are unique per catalog id; quantity ≥ 1.
//! - Unit prices are frozen at add time; later catalog changes never
//!   reprice a cart.
//! - Removal of an unknown id is a no-op, not an error; the UI only
//!   offers removal for lines that exist.
//!
//! Persistence is not this module's job: the session layer snapshots the
//! cart after every mutation through its store hook.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{ComboDefinition, ComboId, ItemId};
use crate::menu::MenuItem;
use crate::money::{Money, TaxRate};
use crate::selection::FinalizedSelection;
use crate::{DELIVERY_FEE_CENTS, ORDER_TAX_BPS};

// =============================================================================
// Cart Line
// =============================================================================

/// What a cart line holds beyond name/price/quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LineKind {
    /// Ordinary menu item, merged by catalog id.
    #[serde(rename_all = "camelCase")]
    Item { item_id: ItemId },

    /// One finalized combo customization.
    #[serde(rename_all = "camelCase")]
    Combo {
        combo_id: ComboId,
        selected_items: Vec<ItemId>,
        additional_items: Vec<ItemId>,
        base_choice: Option<ItemId>,
        /// Display snapshot of the combo definition at add time, for
        /// receipt rendering ("Includes 2 Spring Rolls").
        combo_details: ComboDefinition,
    },
}

/// An entry in the shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog id for ordinary items; synthesized for combos.
    pub line_id: String,

    /// Name at time of adding (frozen).
    pub name: String,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Quantity in cart, always ≥ 1.
    pub quantity: i64,

    /// When this line was added.
    pub added_at: DateTime<Utc>,

    #[serde(flatten)]
    pub kind: LineKind,
}

impl CartLine {
    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Whether this line is a combo customization.
    pub fn is_combo(&self) -> bool {
        matches!(self.kind, LineKind::Combo { .. })
    }

    /// Catalog item id for ordinary lines.
    pub fn item_id(&self) -> Option<ItemId> {
        match self.kind {
            LineKind::Item { item_id } => Some(item_id),
            LineKind::Combo { .. } => None,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for one storefront session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a menu item, merging into an existing line when the catalog id
    /// matches.
    ///
    /// The unit price is frozen from the item as passed in; re-adding the
    /// same id later only bumps the quantity, it never repices the line.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.item_id() == Some(item.id))
        {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine {
            line_id: item.id.to_string(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
            added_at: Utc::now(),
            kind: LineKind::Item { item_id: item.id },
        });
    }

    /// Removes one unit of an ordinary item; drops the line at quantity 1.
    /// Unknown ids are a no-op.
    pub fn remove_item(&mut self, item_id: ItemId) {
        if let Some(pos) = self
            .lines
            .iter()
            .position(|line| line.item_id() == Some(item_id))
        {
            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
    }

    /// Drops a line entirely regardless of quantity (explicit delete on
    /// any line, combo lines included). Unknown ids are a no-op.
    pub fn remove_line(&mut self, line_id: &str) {
        self.lines.retain(|line| line.line_id != line_id);
    }

    /// Bumps the quantity of an existing line ("same again" on a combo
    /// cart row). Unknown ids are a no-op.
    pub fn increment_line(&mut self, line_id: &str) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.line_id == line_id) {
            line.quantity += 1;
        }
    }

    /// Removes one unit of any line by line id; drops the line at
    /// quantity 1. Unknown ids are a no-op.
    pub fn decrement_line(&mut self, line_id: &str) {
        if let Some(pos) = self.lines.iter().position(|line| line.line_id == line_id) {
            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
    }

    /// Appends a finalized combo customization as a fresh line.
    ///
    /// Always a new line: two identical customizations stay separate
    /// (their prices were fixed by selection order at finalize time).
    /// Returns the synthesized line id.
    pub fn add_combo(
        &mut self,
        selection: FinalizedSelection,
        definition: &ComboDefinition,
    ) -> String {
        let line_id = self.synthesize_combo_line_id(selection.combo_id);

        self.lines.push(CartLine {
            line_id: line_id.clone(),
            name: definition.name.clone(),
            unit_price: selection.total,
            quantity: 1,
            added_at: Utc::now(),
            kind: LineKind::Combo {
                combo_id: selection.combo_id,
                selected_items: selection.selected_items,
                additional_items: selection.additional_items,
                base_choice: selection.base_choice,
                combo_details: definition.clone(),
            },
        });

        line_id
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    // -------------------------------------------------------------------------
    // Derived accessors
    // -------------------------------------------------------------------------

    /// Quantity of an ordinary item currently in the cart (0 if absent).
    pub fn item_quantity(&self, item_id: ItemId) -> i64 {
        self.lines
            .iter()
            .find(|line| line.item_id() == Some(item_id))
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines (the cart badge number).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line totals, before tax and fees.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// `combo-{comboId}-{millis}`. Same-millisecond adds bump the stamp so
    /// line ids stay unique within the cart.
    fn synthesize_combo_line_id(&self, combo_id: ComboId) -> String {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let candidate = format!("combo-{combo_id}-{millis}");
            if !self.lines.iter().any(|line| line.line_id == candidate) {
                return candidate;
            }
            millis += 1;
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// How the order reaches the customer. Delivery adds a flat fee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentType {
    #[default]
    Pickup,
    Delivery,
}

impl FulfillmentType {
    /// Flat delivery fee; pickup is free.
    pub fn delivery_fee(&self) -> Money {
        match self {
            FulfillmentType::Pickup => Money::zero(),
            FulfillmentType::Delivery => Money::from_cents(DELIVERY_FEE_CENTS),
        }
    }
}

/// Checkout totals derived from a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    /// 12% BC PST + GST on the subtotal.
    pub tax: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

impl CartTotals {
    /// Computes totals for a cart under the given fulfillment type.
    pub fn compute(cart: &Cart, fulfillment: FulfillmentType) -> Self {
        let subtotal = cart.subtotal();
        let tax = subtotal.calculate_tax(TaxRate::from_bps(ORDER_TAX_BPS));
        let delivery_fee = fulfillment.delivery_fee();

        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal,
            tax,
            delivery_fee,
            total: subtotal + tax + delivery_fee,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
