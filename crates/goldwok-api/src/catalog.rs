//! # Combo Catalog
//!
//! Fetches combos and their selectable pools, and maps the service's
//! id-keyed records into explicit [`ComboDefinition`]s.
//!
//! ## The id table lives here, and only here
//! The service identifies combo families by numeric id; the core engine is
//! deliberately id-agnostic (rules travel on the definition). This module
//! is the one place that knowledge is encoded:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  id 1      Combination for One: ladder pricing over the pooled      │
//! │            count; $17.95 covers the included picks, the next item   │
//! │            steps up $3.00, every item after costs the catalog's     │
//! │            additional price ($7.00)                                 │
//! │                                                                     │
//! │  ids 2–7   Family dinners: one base choice (chow mein / fried       │
//! │            rice) plus a fixed entree count:                         │
//! │              2→2  3→3  4→4  5→5  6→7  7→9                           │
//! │            linear pricing from the catalog record                   │
//! │                                                                     │
//! │  others    Straight: slots = base_items − spring rolls, linear      │
//! │            pricing from the catalog record                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use goldwok_core::catalog::{ComboDefinition, ComboId, ComboItem, ItemId, SelectionRule};
use goldwok_core::money::Money;
use goldwok_core::pricing::PricingStrategy;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::wire::{money_from_decimal, ComboDto, ComboItemDto, ComboWithItemsDto};

/// Combo id of the discount-ladder combination.
pub const LADDER_COMBO_ID: i64 = 1;

/// Step increment for the ladder's first item past the included picks:
/// $17.95 → $20.95 on the printed menu.
const LADDER_STEP_UP_CENTS: i64 = 300;

/// Ladder marginal price when the catalog record omits one.
const LADDER_EXTRA_ITEM_CENTS: i64 = 700;

// =============================================================================
// Fetch operations
// =============================================================================

/// All combos offered by the restaurant (`GET /combos`).
pub async fn fetch_combos(client: &ApiClient) -> ApiResult<Vec<ComboDefinition>> {
    let dtos: Vec<ComboDto> = client.get("/combos").await?;
    debug!(count = dtos.len(), "fetched combo catalog");
    Ok(dtos.into_iter().map(definition_from_wire).collect())
}

/// One combo plus its selectable pool (`GET /combos/{id}`).
pub async fn fetch_combo_with_items(
    client: &ApiClient,
    id: ComboId,
) -> ApiResult<(ComboDefinition, Vec<ComboItem>)> {
    let envelope: ComboWithItemsDto = client.get(&format!("/combos/{}", id.0)).await?;
    debug!(
        combo_id = envelope.combo.id,
        items = envelope.available_items.len(),
        "fetched combo with items"
    );

    let definition = definition_from_wire(envelope.combo);
    let pool = envelope
        .available_items
        .into_iter()
        .map(item_from_wire)
        .collect();
    Ok((definition, pool))
}

// =============================================================================
// Wire → domain mapping
// =============================================================================

/// Entree counts for the base-choice family dinners, keyed by combo id.
/// Dinner for Six/Eight/Ten include more bundled items than picks, so the
/// count is fixed per menu rather than derived from `base_items`.
fn family_entree_selections(id: i64) -> Option<u32> {
    match id {
        2 => Some(2),
        3 => Some(3),
        4 => Some(4),
        5 => Some(5),
        6 => Some(7),
        7 => Some(9),
        _ => None,
    }
}

/// Maps a catalog record to an explicit combo definition.
pub fn definition_from_wire(dto: ComboDto) -> ComboDefinition {
    let bundled = dto.spring_rolls_included.unwrap_or(0);
    let extra_item_price = dto.additional_item_price.map(money_from_decimal);

    let (selection, pricing) = if dto.id == LADDER_COMBO_ID {
        let included_price = money_from_decimal(dto.base_price);
        let included_items = dto.base_items.saturating_sub(bundled);
        (
            SelectionRule::Straight {
                included_items: dto.base_items,
                bundled_items: bundled,
            },
            PricingStrategy::Ladder {
                included_price,
                included_items,
                step_price: included_price + Money::from_cents(LADDER_STEP_UP_CENTS),
                extra_item_price: extra_item_price
                    .unwrap_or_else(|| Money::from_cents(LADDER_EXTRA_ITEM_CENTS)),
            },
        )
    } else if let Some(entree_selections) = family_entree_selections(dto.id) {
        (
            SelectionRule::WithBase { entree_selections },
            PricingStrategy::linear(money_from_decimal(dto.base_price), extra_item_price),
        )
    } else {
        (
            SelectionRule::Straight {
                included_items: dto.base_items,
                bundled_items: bundled,
            },
            PricingStrategy::linear(money_from_decimal(dto.base_price), extra_item_price),
        )
    };

    ComboDefinition {
        id: ComboId(dto.id),
        name: dto.name,
        description: dto.description,
        bundled_spring_rolls: bundled,
        selection,
        pricing,
    }
}

fn item_from_wire(dto: ComboItemDto) -> ComboItem {
    ComboItem {
        id: ItemId(dto.menu_item_id),
        name: dto.item_name,
        description: dto.description,
        is_entree: dto.is_entree,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(id: i64, base_price: f64, base_items: u32, rolls: u32, extra: Option<f64>) -> ComboDto {
        ComboDto {
            id,
            name: format!("Combo {id}"),
            description: None,
            base_price,
            base_items,
            spring_rolls_included: Some(rolls),
            additional_item_price: extra,
        }
    }

    #[test]
    fn test_ladder_combo_mapping() {
        let definition = definition_from_wire(dto(1, 17.95, 3, 1, Some(7.00)));

        assert_eq!(definition.entree_slots(), 2);
        assert!(!definition.requires_base_choice());
        assert_eq!(definition.bundled_spring_rolls, 1);

        // The full observed ladder: 17.95 / 20.95 / +7.00 per item.
        assert_eq!(definition.pricing.total(2, 0), Money::from_cents(1795));
        assert_eq!(definition.pricing.total(2, 1), Money::from_cents(2095));
        assert_eq!(definition.pricing.total(2, 2), Money::from_cents(2795));
    }

    #[test]
    fn test_family_dinner_mapping() {
        let definition = definition_from_wire(dto(2, 22.95, 4, 2, Some(4.00)));

        assert!(definition.requires_base_choice());
        assert_eq!(definition.entree_slots(), 2);
        assert_eq!(definition.pricing.total(2, 0), Money::from_cents(2295));
        assert_eq!(definition.pricing.total(2, 1), Money::from_cents(2695));
    }

    #[test]
    fn test_family_entree_counts() {
        // Observed menu: 2→2, 3→3, 4→4, 5→5, 6→7, 7→9.
        for (id, expected) in [(2, 2), (3, 3), (4, 4), (5, 5), (6, 7), (7, 9)] {
            let definition = definition_from_wire(dto(id, 22.95, 4, 2, None));
            assert_eq!(definition.entree_slots(), expected, "combo {id}");
            assert!(definition.requires_base_choice());
        }
    }

    #[test]
    fn test_plain_combo_mapping() {
        let definition = definition_from_wire(dto(9, 13.95, 2, 0, None));

        assert!(!definition.requires_base_choice());
        assert_eq!(definition.entree_slots(), 2);
        // No additional price on record → extras are free, not an error.
        assert_eq!(definition.pricing.total(2, 3), Money::from_cents(1395));
    }

    #[test]
    fn test_item_mapping_partitions_pool() {
        let entree = item_from_wire(ComboItemDto {
            menu_item_id: 11,
            item_name: "Ginger Beef".to_string(),
            description: None,
            is_entree: true,
        });
        let base = item_from_wire(ComboItemDto {
            menu_item_id: 21,
            item_name: "Chicken Chow Mein".to_string(),
            description: None,
            is_entree: false,
        });

        assert_eq!(entree.id, ItemId(11));
        assert!(entree.is_entree);
        assert!(!base.is_entree);
    }
}
