//! # Order Lines
//!
//! Pure projection of the cart into the shape the order-creation endpoint
//! expects. Combo lines keep the raw selection ids so the kitchen ticket
//! can list exactly what was chosen; ordinary lines reference the catalog
//! item. The checkout flow wraps these lines with customer details and
//! totals (see `goldwok-api::orders`).
//!
//! Wire prices are decimal dollars; the conversion from cents happens here
//! at serialization and nowhere feeds back into arithmetic.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, LineKind};
use crate::catalog::{ComboId, ItemId};

// =============================================================================
// Order Line
// =============================================================================

/// One line of an order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum OrderLine {
    /// A finalized combo customization.
    #[serde(rename_all = "camelCase")]
    Combo {
        is_combo: bool,
        combo_id: ComboId,
        selected_items: Vec<ItemId>,
        additional_items: Vec<ItemId>,
        base_choice: Option<ItemId>,
        quantity: i64,
        /// Unit price in decimal dollars (wire format).
        price: f64,
        item_name: String,
    },

    /// An ordinary menu item.
    #[serde(rename_all = "camelCase")]
    Item {
        menu_item_id: ItemId,
        quantity: i64,
        /// Unit price in decimal dollars (wire format).
        price: f64,
        item_name: String,
    },
}

/// Projects the cart into order-submission lines.
pub fn order_lines(cart: &Cart) -> Vec<OrderLine> {
    cart.lines
        .iter()
        .map(|line| match &line.kind {
            LineKind::Item { item_id } => OrderLine::Item {
                menu_item_id: *item_id,
                quantity: line.quantity,
                price: line.unit_price.to_major_units(),
                item_name: line.name.clone(),
            },
            LineKind::Combo {
                combo_id,
                selected_items,
                additional_items,
                base_choice,
                ..
            } => OrderLine::Combo {
                is_combo: true,
                combo_id: *combo_id,
                selected_items: selected_items.clone(),
                additional_items: additional_items.clone(),
                base_choice: *base_choice,
                quantity: line.quantity,
                price: line.unit_price.to_major_units(),
                item_name: line.name.clone(),
            },
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ComboDefinition, ComboItem, SelectionRule};
    use crate::menu::MenuItem;
    use crate::money::Money;
    use crate::pricing::PricingStrategy;
    use crate::selection::ComboSession;

    fn mixed_cart() -> Cart {
        let mut cart = Cart::new();

        cart.add_item(&MenuItem {
            id: ItemId(31),
            name: "Wonton Soup".to_string(),
            description: None,
            price: Money::from_cents(895),
            category_id: 2,
            image_url: None,
            is_available: true,
        });

        let definition = ComboDefinition {
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
        };
        let pool = vec![
            ComboItem {
                id: ItemId(11),
                name: "Sweet and Sour Pork".to_string(),
                description: None,
                is_entree: true,
            },
            ComboItem {
                id: ItemId(12),
                name: "Ginger Beef".to_string(),
                description: None,
                is_entree: true,
            },
        ];
        let mut session = ComboSession::new(definition.clone(), pool);
        session.toggle_entree(ItemId(11));
        session.toggle_entree(ItemId(12));
        cart.add_combo(session.finalize().unwrap(), &definition);

        cart
    }

    #[test]
    fn test_order_lines_projection() {
        let cart = mixed_cart();
        let lines = order_lines(&cart);
        assert_eq!(lines.len(), 2);

        match &lines[0] {
            OrderLine::Item {
                menu_item_id,
                quantity,
                price,
                item_name,
            } => {
                assert_eq!(*menu_item_id, ItemId(31));
                assert_eq!(*quantity, 1);
                assert!((price - 8.95).abs() < 1e-9);
                assert_eq!(item_name, "Wonton Soup");
            }
            OrderLine::Combo { .. } => panic!("expected an item line first"),
        }

        match &lines[1] {
            OrderLine::Combo {
                is_combo,
                combo_id,
                selected_items,
                additional_items,
                base_choice,
                price,
                ..
            } => {
                assert!(is_combo);
                assert_eq!(*combo_id, ComboId(1));
                assert_eq!(selected_items, &[ItemId(11), ItemId(12)]);
                assert!(additional_items.is_empty());
                assert_eq!(*base_choice, None);
                assert!((price - 17.95).abs() < 1e-9);
            }
            OrderLine::Item { .. } => panic!("expected a combo line second"),
        }
    }

    #[test]
    fn test_wire_shape() {
        let cart = mixed_cart();
        let json = serde_json::to_value(order_lines(&cart)).unwrap();

        // Ordinary line: menuItemId, no combo fields.
        assert_eq!(json[0]["menuItemId"], 31);
        assert!(json[0].get("isCombo").is_none());

        // Combo line: isCombo flag plus raw selection ids.
        assert_eq!(json[1]["isCombo"], true);
        assert_eq!(json[1]["comboId"], 1);
        assert_eq!(json[1]["selectedItems"][0], 11);
        assert_eq!(json[1]["itemName"], "Combination for One");
    }
}
