//! # Combo Catalog Types
//!
//! Core domain types for combo meals and their selectable item pools.
//!
//! ## Configuration over id switches
//! The remote catalog identifies combos by numeric id, and the observed
//! menu attaches different selection/pricing rules to different ids. Here
//! every rule is an explicit field on [`ComboDefinition`]: the engine and
//! pricing code never branch on a combo id, so new combo types are a
//! catalog-mapping change, not a code change.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       ComboDefinition                               │
//! │                                                                     │
//! │  selection: SelectionRule          pricing: PricingStrategy         │
//! │  ├── Straight { included,          ├── Linear { base_price,         │
//! │  │       bundled }                 │       extra_item_price }       │
//! │  └── WithBase { entree_            └── Ladder { included_price,     │
//! │          selections }                      step_price, ... }        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::pricing::PricingStrategy;

// =============================================================================
// Identifiers
// =============================================================================

/// Catalog id of a selectable menu item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog id of a combo meal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ComboId(pub i64);

impl fmt::Display for ComboId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Combo Item
// =============================================================================

/// One selectable item in a combo's pool.
///
/// `is_entree` partitions the pool: entree items fill the combo's included
/// slots (and may be added as paid extras); non-entree items are the
/// mutually-exclusive base options (chow mein vs. fried rice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComboItem {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub is_entree: bool,
}

// =============================================================================
// Selection Rule
// =============================================================================

/// How many picks a combo requires, and of what kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionRule {
    /// Entree picks only. The customer fills `included_items` slots minus
    /// the `bundled_items` the kitchen adds for free (spring rolls).
    Straight {
        included_items: u32,
        bundled_items: u32,
    },

    /// One mutually-exclusive base choice plus a fixed number of entree
    /// picks. The base choice does not consume an entree slot.
    WithBase { entree_selections: u32 },
}

impl SelectionRule {
    /// Number of entree slots the customer must fill.
    pub fn entree_slots(&self) -> u32 {
        match *self {
            // The observed catalog never bundles more than it includes,
            // but the engine must not underflow if the data does.
            SelectionRule::Straight {
                included_items,
                bundled_items,
            } => included_items.saturating_sub(bundled_items),
            SelectionRule::WithBase { entree_selections } => entree_selections,
        }
    }

    /// Whether a separate base choice is required before the combo is
    /// complete.
    pub fn requires_base_choice(&self) -> bool {
        matches!(self, SelectionRule::WithBase { .. })
    }
}

// =============================================================================
// Combo Definition
// =============================================================================

/// A combo meal offering: display metadata plus its explicit selection and
/// pricing rules.
///
/// Read-only to the core; produced by the catalog mapping in `goldwok-api`
/// and snapshotted onto combo cart lines for receipt rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComboDefinition {
    pub id: ComboId,

    /// Display name shown on cards and receipts.
    pub name: String,

    pub description: Option<String>,

    /// Free items bundled into the combo (shown as "Includes N Spring
    /// Rolls"); already accounted for in the selection rule's slot count.
    pub bundled_spring_rolls: u32,

    pub selection: SelectionRule,

    pub pricing: PricingStrategy,
}

impl ComboDefinition {
    /// Number of entree slots the customer must fill.
    #[inline]
    pub fn entree_slots(&self) -> u32 {
        self.selection.entree_slots()
    }

    /// Whether this combo requires a base choice.
    #[inline]
    pub fn requires_base_choice(&self) -> bool {
        self.selection.requires_base_choice()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_rule_slots() {
        let rule = SelectionRule::Straight {
            included_items: 3,
            bundled_items: 1,
        };
        assert_eq!(rule.entree_slots(), 2);
        assert!(!rule.requires_base_choice());
    }

    #[test]
    fn test_straight_rule_never_underflows() {
        let rule = SelectionRule::Straight {
            included_items: 1,
            bundled_items: 4,
        };
        assert_eq!(rule.entree_slots(), 0);
    }

    #[test]
    fn test_with_base_rule() {
        let rule = SelectionRule::WithBase {
            entree_selections: 4,
        };
        assert_eq!(rule.entree_slots(), 4);
        assert!(rule.requires_base_choice());
    }
}
