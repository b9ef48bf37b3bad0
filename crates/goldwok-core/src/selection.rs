//! # Combo Selection Engine
//!
//! Tracks one combo customization session: the base choice, the capped
//! entree picks, and the uncapped paid extras.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Combo Customization Session                      │
//! │                                                                     │
//! │  ComboSession::new(definition, pool)                                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  choose_base / toggle_entree / toggle_extra   (any order, any       │
//! │       │                                        number of times)     │
//! │       ▼                                                             │
//! │  is_complete()? ──── no ──► missing() drives the UI prompt          │
//! │       │ yes                                                         │
//! │       ▼                                                             │
//! │  finalize() ──► FinalizedSelection ──► Cart::add_combo              │
//! │                                                                     │
//! │  Switching combos = constructing a new session. Sessions are never  │
//! │  persisted; they end in a cart line or are dropped.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes, not exceptions
//! Toggles report what happened ([`Toggle::Added`], [`Toggle::Removed`],
//! [`Toggle::Rejected`]); a rejected toggle leaves the session untouched.
//! UIs that disable over-cap controls can ignore the outcome entirely.
//! Errors are reserved for broken preconditions (see
//! [`crate::error::SelectionError`]).
//!
//! ## Invariants
//! - `selected` never exceeds the rule's entree slots; removal is always
//!   allowed.
//! - Ids in `selected` and `extras` are unique and the two sets are
//!   disjoint (positions feed ladder pricing; one id, one position).
//! - Insertion order is preserved in both lists.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::catalog::{ComboDefinition, ComboId, ComboItem, ItemId};
use crate::error::SelectionError;
use crate::money::Money;

// =============================================================================
// Toggle Outcomes
// =============================================================================

/// Result of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Toggle {
    /// The item was added to the list.
    Added,
    /// The item was already in the list and has been removed.
    Removed,
    /// The request was refused; the session is unchanged.
    Rejected(RejectReason),
}

/// Why a toggle was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// All entree slots are filled; deselect something first.
    AtCapacity,
    /// The id is not an entree in this combo's pool.
    UnknownItem,
    /// The id is already in the other list (an item holds exactly one
    /// pooled position).
    AlreadyIncluded,
}

impl Toggle {
    /// Whether the toggle changed the session.
    pub fn changed(&self) -> bool {
        !matches!(self, Toggle::Rejected(_))
    }
}

// =============================================================================
// Missing
// =============================================================================

/// What a selection still needs before it can be finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Missing {
    /// A base choice is required and not yet made.
    pub base_choice: bool,
    /// Entree slots left to fill.
    pub entrees: u32,
}

impl Missing {
    /// Nothing is missing.
    pub fn none() -> Self {
        Missing {
            base_choice: false,
            entrees: 0,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        !self.base_choice && self.entrees == 0
    }
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.base_choice, self.entrees) {
            (false, 0) => write!(f, "nothing"),
            (true, 0) => write!(f, "base choice"),
            (false, n) => write!(f, "{n} more entree{}", if n > 1 { "s" } else { "" }),
            (true, n) => write!(
                f,
                "base choice and {n} more entree{}",
                if n > 1 { "s" } else { "" }
            ),
        }
    }
}

// =============================================================================
// Finalized Selection
// =============================================================================

/// A complete customization, frozen for the cart.
///
/// Only [`ComboSession::finalize`] produces one, so holding a value is
/// proof the selection was complete and the total was computed by the
/// combo's pricing rule at that moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedSelection {
    pub combo_id: ComboId,
    pub selected_items: Vec<ItemId>,
    pub additional_items: Vec<ItemId>,
    pub base_choice: Option<ItemId>,
    pub total: Money,
}

// =============================================================================
// Combo Session
// =============================================================================

/// One in-progress combo customization.
///
/// Holds the combo definition, the selectable pool, and the evolving
/// choices. Purely in-memory; no I/O.
#[derive(Debug, Clone)]
pub struct ComboSession {
    definition: ComboDefinition,
    pool: Vec<ComboItem>,
    base_choice: Option<ItemId>,
    selected: Vec<ItemId>,
    extras: Vec<ItemId>,
}

impl ComboSession {
    /// Starts a fresh session for `definition` over `pool`.
    ///
    /// Call again with the new combo whenever the target combo changes;
    /// choices never carry over between combos.
    pub fn new(definition: ComboDefinition, pool: Vec<ComboItem>) -> Self {
        ComboSession {
            definition,
            pool,
            base_choice: None,
            selected: Vec::new(),
            extras: Vec::new(),
        }
    }

    /// The combo being customized.
    pub fn definition(&self) -> &ComboDefinition {
        &self.definition
    }

    /// Entree options in this combo's pool.
    pub fn entree_options(&self) -> impl Iterator<Item = &ComboItem> {
        self.pool.iter().filter(|item| item.is_entree)
    }

    /// Base-choice options in this combo's pool.
    pub fn base_options(&self) -> impl Iterator<Item = &ComboItem> {
        self.pool.iter().filter(|item| !item.is_entree)
    }

    /// Current base choice, if any.
    pub fn base_choice(&self) -> Option<ItemId> {
        self.base_choice
    }

    /// Entree picks, in insertion order.
    pub fn selected(&self) -> &[ItemId] {
        &self.selected
    }

    /// Paid extras, in insertion order.
    pub fn extras(&self) -> &[ItemId] {
        &self.extras
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Sets the base choice (single-select; overwrites any prior choice).
    ///
    /// ## Errors
    /// - [`SelectionError::BaseChoiceNotAccepted`] if the combo's rule has
    ///   no base step.
    /// - [`SelectionError::NotABaseOption`] if the id is not one of the
    ///   pool's base options.
    pub fn choose_base(&mut self, item: ItemId) -> Result<(), SelectionError> {
        if !self.definition.requires_base_choice() {
            return Err(SelectionError::BaseChoiceNotAccepted {
                combo_id: self.definition.id,
            });
        }

        let is_base_option = self
            .pool
            .iter()
            .any(|candidate| candidate.id == item && !candidate.is_entree);
        if !is_base_option {
            return Err(SelectionError::NotABaseOption {
                combo_id: self.definition.id,
                item_id: item,
            });
        }

        self.base_choice = Some(item);
        Ok(())
    }

    /// Toggles an entree pick.
    ///
    /// ## Behavior
    /// - Already selected: removed (shrinking is never blocked).
    /// - Below the slot cap: added.
    /// - At the cap: `Rejected(AtCapacity)`, session unchanged.
    pub fn toggle_entree(&mut self, item: ItemId) -> Toggle {
        if let Some(pos) = self.selected.iter().position(|&id| id == item) {
            self.selected.remove(pos);
            return Toggle::Removed;
        }

        if !self.is_pool_entree(item) {
            return Toggle::Rejected(RejectReason::UnknownItem);
        }
        if self.extras.contains(&item) {
            return Toggle::Rejected(RejectReason::AlreadyIncluded);
        }
        if self.selected.len() as u32 >= self.definition.entree_slots() {
            return Toggle::Rejected(RejectReason::AtCapacity);
        }

        self.selected.push(item);
        Toggle::Added
    }

    /// Toggles a paid extra. No cap beyond the pool itself.
    pub fn toggle_extra(&mut self, item: ItemId) -> Toggle {
        if let Some(pos) = self.extras.iter().position(|&id| id == item) {
            self.extras.remove(pos);
            return Toggle::Removed;
        }

        if !self.is_pool_entree(item) {
            return Toggle::Rejected(RejectReason::UnknownItem);
        }
        if self.selected.contains(&item) {
            return Toggle::Rejected(RejectReason::AlreadyIncluded);
        }

        self.extras.push(item);
        Toggle::Added
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    /// Whether the selection can be finalized.
    pub fn is_complete(&self) -> bool {
        self.missing().is_satisfied()
    }

    /// What is still needed, for UI prompts ("Choose your base first",
    /// "Select 2 more entree items").
    pub fn missing(&self) -> Missing {
        let slots = self.definition.entree_slots();
        let picked = self.selected.len() as u32;
        Missing {
            base_choice: self.definition.requires_base_choice() && self.base_choice.is_none(),
            entrees: slots.saturating_sub(picked),
        }
    }

    /// Live total for the current (possibly incomplete) selection.
    ///
    /// Deterministic at every step; completeness gates only `finalize`.
    pub fn total(&self) -> Money {
        self.definition
            .pricing
            .total(self.selected.len() as u32, self.extras.len() as u32)
    }

    /// Price hint for adding one more extra right now.
    pub fn next_extra_price(&self) -> Money {
        let next_position = (self.selected.len() + self.extras.len() + 1) as u32;
        self.definition.pricing.price_of_position(next_position)
    }

    /// Price an already-chosen extra was added at (its pooled position at
    /// add time is its index after the entree picks). `None` if the id is
    /// not currently an extra.
    pub fn extra_price(&self, item: ItemId) -> Option<Money> {
        let index = self.extras.iter().position(|&id| id == item)?;
        let position = (self.selected.len() + index + 1) as u32;
        Some(self.definition.pricing.price_of_position(position))
    }

    /// Freezes the selection for the cart.
    ///
    /// ## Errors
    /// [`SelectionError::Incomplete`] with the remaining requirements if
    /// the selection is not yet complete.
    pub fn finalize(&self) -> Result<FinalizedSelection, SelectionError> {
        let missing = self.missing();
        if !missing.is_satisfied() {
            return Err(SelectionError::Incomplete {
                combo_id: self.definition.id,
                missing,
            });
        }

        Ok(FinalizedSelection {
            combo_id: self.definition.id,
            selected_items: self.selected.clone(),
            additional_items: self.extras.clone(),
            base_choice: self.base_choice,
            total: self.total(),
        })
    }

    fn is_pool_entree(&self, item: ItemId) -> bool {
        self.pool
            .iter()
            .any(|candidate| candidate.id == item && candidate.is_entree)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SelectionRule;
    use crate::pricing::PricingStrategy;

    fn entree(id: i64, name: &str) -> ComboItem {
        ComboItem {
            id: ItemId(id),
            name: name.to_string(),
            description: None,
            is_entree: true,
        }
    }

    fn base_option(id: i64, name: &str) -> ComboItem {
        ComboItem {
            id: ItemId(id),
            name: name.to_string(),
            description: None,
            is_entree: false,
        }
    }

    /// The discount-ladder combo: 2 included picks, no base choice.
    fn ladder_combo() -> ComboDefinition {
        ComboDefinition {
            id: ComboId(1),
            name: "Combination for One".to_string(),
            description: None,
            bundled_spring_rolls: 1,
            selection: SelectionRule::Straight {
                included_items: 3,
                bundled_items: 1,
            },
            pricing: PricingStrategy::Ladder {
                included_price: Money::from_cents(1795),
                included_items: 2,
                step_price: Money::from_cents(2095),
                extra_item_price: Money::from_cents(700),
            },
        }
    }

    /// A base-choice family dinner: base pick + 2 entrees, $22.95 + $4.00/extra.
    fn dinner_for_two() -> ComboDefinition {
        ComboDefinition {
            id: ComboId(2),
            name: "Dinner for Two".to_string(),
            description: None,
            bundled_spring_rolls: 2,
            selection: SelectionRule::WithBase {
                entree_selections: 2,
            },
            pricing: PricingStrategy::linear(
                Money::from_cents(2295),
                Some(Money::from_cents(400)),
            ),
        }
    }

    fn entree_pool() -> Vec<ComboItem> {
        vec![
            entree(11, "Sweet and Sour Pork"),
            entree(12, "Ginger Beef"),
            entree(13, "Lemon Chicken"),
            entree(14, "Szechuan Shrimp"),
        ]
    }

    fn dinner_pool() -> Vec<ComboItem> {
        let mut pool = entree_pool();
        pool.push(base_option(21, "Chicken Chow Mein"));
        pool.push(base_option(22, "Chicken Fried Rice"));
        pool
    }

    #[test]
    fn test_toggle_entree_caps_at_slots() {
        let mut session = ComboSession::new(ladder_combo(), entree_pool());

        assert_eq!(session.toggle_entree(ItemId(11)), Toggle::Added);
        assert_eq!(session.toggle_entree(ItemId(12)), Toggle::Added);
        assert_eq!(
            session.toggle_entree(ItemId(13)),
            Toggle::Rejected(RejectReason::AtCapacity)
        );
        assert_eq!(session.selected(), &[ItemId(11), ItemId(12)]);
    }

    #[test]
    fn test_removal_always_allowed_at_cap() {
        let mut session = ComboSession::new(ladder_combo(), entree_pool());
        session.toggle_entree(ItemId(11));
        session.toggle_entree(ItemId(12));

        assert_eq!(session.toggle_entree(ItemId(11)), Toggle::Removed);
        assert_eq!(session.selected(), &[ItemId(12)]);
        // Freed slot can be refilled.
        assert_eq!(session.toggle_entree(ItemId(13)), Toggle::Added);
    }

    #[test]
    fn test_unknown_item_rejected() {
        let mut session = ComboSession::new(ladder_combo(), entree_pool());
        assert_eq!(
            session.toggle_entree(ItemId(99)),
            Toggle::Rejected(RejectReason::UnknownItem)
        );
        assert_eq!(
            session.toggle_extra(ItemId(99)),
            Toggle::Rejected(RejectReason::UnknownItem)
        );
    }

    #[test]
    fn test_no_id_in_both_lists() {
        let mut session = ComboSession::new(ladder_combo(), entree_pool());
        session.toggle_entree(ItemId(11));
        session.toggle_extra(ItemId(13));

        assert_eq!(
            session.toggle_extra(ItemId(11)),
            Toggle::Rejected(RejectReason::AlreadyIncluded)
        );
        assert_eq!(
            session.toggle_entree(ItemId(13)),
            Toggle::Rejected(RejectReason::AlreadyIncluded)
        );

        // The invariant proper: the lists stay disjoint.
        assert!(session
            .selected()
            .iter()
            .all(|id| !session.extras().contains(id)));
    }

    #[test]
    fn test_rejected_toggle_leaves_session_unchanged() {
        let mut session = ComboSession::new(ladder_combo(), entree_pool());
        session.toggle_entree(ItemId(11));
        session.toggle_entree(ItemId(12));
        let before_selected = session.selected().to_vec();
        let before_total = session.total();

        let outcome = session.toggle_entree(ItemId(13));
        assert!(!outcome.changed());
        assert_eq!(session.selected(), before_selected.as_slice());
        assert_eq!(session.total(), before_total);
    }

    #[test]
    fn test_base_choice_precondition() {
        let mut session = ComboSession::new(ladder_combo(), entree_pool());
        assert_eq!(
            session.choose_base(ItemId(11)),
            Err(SelectionError::BaseChoiceNotAccepted {
                combo_id: ComboId(1)
            })
        );
    }

    #[test]
    fn test_base_choice_single_select_overwrites() {
        let mut session = ComboSession::new(dinner_for_two(), dinner_pool());
        session.choose_base(ItemId(21)).unwrap();
        session.choose_base(ItemId(22)).unwrap();
        assert_eq!(session.base_choice(), Some(ItemId(22)));
    }

    #[test]
    fn test_base_choice_must_be_base_option() {
        let mut session = ComboSession::new(dinner_for_two(), dinner_pool());
        // An entree id is not a valid base choice.
        assert_eq!(
            session.choose_base(ItemId(11)),
            Err(SelectionError::NotABaseOption {
                combo_id: ComboId(2),
                item_id: ItemId(11),
            })
        );
    }

    #[test]
    fn test_completeness_straight_combo() {
        let mut session = ComboSession::new(ladder_combo(), entree_pool());
        assert!(!session.is_complete());

        session.toggle_entree(ItemId(11));
        assert!(!session.is_complete());
        assert_eq!(session.missing().entrees, 1);

        session.toggle_entree(ItemId(12));
        assert!(session.is_complete());
    }

    #[test]
    fn test_completeness_requires_base_choice() {
        let mut session = ComboSession::new(dinner_for_two(), dinner_pool());
        session.toggle_entree(ItemId(11));
        session.toggle_entree(ItemId(12));

        // Entree count satisfied; base still missing.
        assert!(!session.is_complete());
        assert!(session.missing().base_choice);
        assert_eq!(session.missing().to_string(), "base choice");

        session.choose_base(ItemId(21)).unwrap();
        assert!(session.is_complete());
    }

    #[test]
    fn test_missing_display() {
        let session = ComboSession::new(dinner_for_two(), dinner_pool());
        assert_eq!(
            session.missing().to_string(),
            "base choice and 2 more entrees"
        );
    }

    #[test]
    fn test_ladder_end_to_end() {
        // Combo 1: select A, B → 17.95; extra C → 20.95; extra D → 27.95;
        // remove C → 20.95.
        let mut session = ComboSession::new(ladder_combo(), entree_pool());

        session.toggle_entree(ItemId(11));
        session.toggle_entree(ItemId(12));
        assert_eq!(session.total(), Money::from_cents(1795));

        session.toggle_extra(ItemId(13));
        assert_eq!(session.total(), Money::from_cents(2095));

        session.toggle_extra(ItemId(14));
        assert_eq!(session.total(), Money::from_cents(2795));

        session.toggle_extra(ItemId(13));
        assert_eq!(session.total(), Money::from_cents(2095));
    }

    #[test]
    fn test_dinner_for_two_end_to_end() {
        // Combo 2: base + 2 entrees complete at $22.95; one extra → $26.95.
        let mut session = ComboSession::new(dinner_for_two(), dinner_pool());
        session.choose_base(ItemId(21)).unwrap();
        session.toggle_entree(ItemId(11));
        session.toggle_entree(ItemId(12));

        assert!(session.is_complete());
        assert_eq!(session.total(), Money::from_cents(2295));

        session.toggle_extra(ItemId(13));
        assert_eq!(session.total(), Money::from_cents(2695));
    }

    #[test]
    fn test_base_choice_never_affects_price() {
        let mut session = ComboSession::new(dinner_for_two(), dinner_pool());
        session.toggle_entree(ItemId(11));
        session.toggle_entree(ItemId(12));
        let before = session.total();

        session.choose_base(ItemId(21)).unwrap();
        assert_eq!(session.total(), before);
        session.choose_base(ItemId(22)).unwrap();
        assert_eq!(session.total(), before);
    }

    #[test]
    fn test_total_invariant_under_selection_order() {
        // Same picks in a different order price identically.
        let mut forward = ComboSession::new(dinner_for_two(), dinner_pool());
        forward.toggle_entree(ItemId(11));
        forward.toggle_entree(ItemId(12));
        forward.toggle_extra(ItemId(13));

        let mut reverse = ComboSession::new(dinner_for_two(), dinner_pool());
        reverse.toggle_entree(ItemId(12));
        reverse.toggle_entree(ItemId(11));
        reverse.toggle_extra(ItemId(13));

        assert_eq!(forward.total(), reverse.total());
    }

    #[test]
    fn test_next_extra_price_hints() {
        let mut session = ComboSession::new(ladder_combo(), entree_pool());
        assert_eq!(session.next_extra_price(), Money::zero());

        session.toggle_entree(ItemId(11));
        session.toggle_entree(ItemId(12));
        // Third pooled item steps up $3.00.
        assert_eq!(session.next_extra_price(), Money::from_cents(300));

        session.toggle_extra(ItemId(13));
        // Fourth and beyond cost $7.00.
        assert_eq!(session.next_extra_price(), Money::from_cents(700));

        assert_eq!(session.extra_price(ItemId(13)), Some(Money::from_cents(300)));
        assert_eq!(session.extra_price(ItemId(14)), None);
    }

    #[test]
    fn test_pricing_allowed_while_incomplete() {
        let session = ComboSession::new(dinner_for_two(), dinner_pool());
        // Nothing selected: still a deterministic number, the base price.
        assert_eq!(session.total(), Money::from_cents(2295));
    }

    #[test]
    fn test_finalize_gates_on_completeness() {
        let mut session = ComboSession::new(dinner_for_two(), dinner_pool());
        session.toggle_entree(ItemId(11));

        let err = session.finalize().unwrap_err();
        assert!(matches!(err, SelectionError::Incomplete { .. }));

        session.toggle_entree(ItemId(12));
        session.choose_base(ItemId(21)).unwrap();
        let finalized = session.finalize().unwrap();
        assert_eq!(finalized.combo_id, ComboId(2));
        assert_eq!(finalized.selected_items, vec![ItemId(11), ItemId(12)]);
        assert_eq!(finalized.base_choice, Some(ItemId(21)));
        assert_eq!(finalized.total, Money::from_cents(2295));
    }

    #[test]
    fn test_new_session_starts_empty() {
        // Switching combos constructs a new session; nothing carries over.
        let mut first = ComboSession::new(ladder_combo(), entree_pool());
        first.toggle_entree(ItemId(11));

        let second = ComboSession::new(dinner_for_two(), dinner_pool());
        assert!(second.selected().is_empty());
        assert!(second.extras().is_empty());
        assert_eq!(second.base_choice(), None);
    }
}
