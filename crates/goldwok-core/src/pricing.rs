//! # Combo Pricing
//!
//! Pure pricing rules for combo meals. Deterministic: same strategy + same
//! selection counts = same total, regardless of which items were picked.
//!
//! ## The two rule families
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Linear (most combos)                                               │
//! │    total = base_price + extras × extra_item_price                   │
//! │    Included picks never add cost; base choice never affects price.  │
//! │                                                                     │
//! │  Ladder (the discount-ladder combo)                                 │
//! │    Step function of the POOLED count n = picks + extras:            │
//! │      n ≤ 2 → $17.95      (first two items ride the base price)      │
//! │      n = 3 → $20.95      (third item steps up $3.00)                │
//! │      n ≥ 4 → $20.95 + (n−3) × $7.00                                 │
//! │                                                                     │
//! │    Marginal decomposition (display hints):                          │
//! │      position 1–2 → $0.00, position 3 → $3.00, position 4+ → $7.00  │
//! │    The step function is authoritative; the per-position deltas      │
//! │    telescope back to it (asserted under test).                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing is never gated on completeness: an in-progress selection still
//! prices deterministically so the UI can show a live total.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Pricing Strategy
// =============================================================================

/// Per-combo pricing rule, carried on the combo definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingStrategy {
    /// Flat base price; each extra item adds a constant amount.
    Linear {
        base_price: Money,
        extra_item_price: Money,
    },

    /// Position-dependent step pricing over the pooled item count
    /// (included picks and paid extras priced as one sequence).
    Ladder {
        /// Total while the pooled count is within the included slots.
        included_price: Money,
        /// How many pooled items the included price covers.
        included_items: u32,
        /// Total at exactly one item past the included slots.
        step_price: Money,
        /// Marginal price of every item after the step.
        extra_item_price: Money,
    },
}

impl PricingStrategy {
    /// Linear pricing; `extra_item_price` defaults to zero when the
    /// catalog omits it.
    pub fn linear(base_price: Money, extra_item_price: Option<Money>) -> Self {
        PricingStrategy::Linear {
            base_price,
            extra_item_price: extra_item_price.unwrap_or_else(Money::zero),
        }
    }

    /// Total for a selection with `selected` included picks and `extras`
    /// paid add-ons.
    ///
    /// Linear combos charge for extras only; ladder combos pool both
    /// counts into one position sequence.
    pub fn total(&self, selected: u32, extras: u32) -> Money {
        match *self {
            PricingStrategy::Linear {
                base_price,
                extra_item_price,
            } => base_price + extra_item_price.multiply_quantity(extras as i64),

            PricingStrategy::Ladder {
                included_price,
                included_items,
                step_price,
                extra_item_price,
            } => {
                let n = selected + extras;
                if n <= included_items {
                    included_price
                } else if n == included_items + 1 {
                    step_price
                } else {
                    let beyond_step = (n - included_items - 1) as i64;
                    step_price + extra_item_price.multiply_quantity(beyond_step)
                }
            }
        }
    }

    /// Marginal price of the item at 1-based pooled `position`.
    ///
    /// This is the "+$X.XX" hint shown next to an extra item. For linear
    /// combos the hint is flat; for the ladder it depends on how many
    /// items precede it:
    ///
    /// ```rust
    /// use goldwok_core::money::Money;
    /// use goldwok_core::pricing::PricingStrategy;
    ///
    /// let ladder = PricingStrategy::Ladder {
    ///     included_price: Money::from_cents(1795),
    ///     included_items: 2,
    ///     step_price: Money::from_cents(2095),
    ///     extra_item_price: Money::from_cents(700),
    /// };
    /// assert_eq!(ladder.price_of_position(1), Money::zero());
    /// assert_eq!(ladder.price_of_position(3), Money::from_cents(300));
    /// assert_eq!(ladder.price_of_position(4), Money::from_cents(700));
    /// ```
    pub fn price_of_position(&self, position: u32) -> Money {
        match *self {
            PricingStrategy::Linear {
                extra_item_price, ..
            } => extra_item_price,

            PricingStrategy::Ladder {
                included_price,
                included_items,
                step_price,
                extra_item_price,
            } => {
                if position <= included_items {
                    Money::zero()
                } else if position == included_items + 1 {
                    step_price - included_price
                } else {
                    extra_item_price
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
