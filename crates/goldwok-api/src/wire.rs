//! # Wire DTOs
//!
//! Response shapes exactly as the storefront service sends them. Catalog
//! entities arrive snake_case; menu items and envelope fields arrive
//! camelCase. Domain mapping happens in the sibling modules; nothing
//! outside this crate sees these types.
//!
//! This module also holds the workspace's ONE float→cents crossing:
//! the service carries decimal dollars, the core carries integer cents.

use serde::{Deserialize, Serialize};

use goldwok_core::money::Money;

// =============================================================================
// Decimal boundary
// =============================================================================

/// Converts a wire decimal-dollar amount to [`Money`].
///
/// Round-half-away at the second decimal absorbs float representation
/// error (`17.95` may arrive as `17.949999...`). Every price entering the
/// workspace passes through here exactly once.
pub(crate) fn money_from_decimal(value: f64) -> Money {
    Money::from_cents((value * 100.0).round() as i64)
}

// =============================================================================
// Catalog DTOs
// =============================================================================

/// A combo as listed by `GET /combos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub base_price: f64,
    pub base_items: u32,
    #[serde(default)]
    pub spring_rolls_included: Option<u32>,
    #[serde(default)]
    pub additional_item_price: Option<f64>,
}

/// A selectable item in a combo's pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboItemDto {
    pub menu_item_id: i64,
    pub item_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_entree: bool,
}

/// `GET /combos/{id}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboWithItemsDto {
    pub combo: ComboDto,
    #[serde(rename = "availableItems", default)]
    pub available_items: Vec<ComboItemDto>,
}

// =============================================================================
// Menu DTOs
// =============================================================================

/// An ordinary menu item as served inside the category-keyed menu map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub category_id: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

/// `GET /menu` envelope: restaurant metadata plus the category-keyed map.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuEnvelopeDto {
    pub menu: std::collections::HashMap<String, Vec<MenuItemDto>>,
}

/// A menu category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// `GET /menu/categories` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesEnvelopeDto {
    pub categories: Vec<CategoryDto>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(money_from_decimal(17.95), Money::from_cents(1795));
        assert_eq!(money_from_decimal(0.0), Money::zero());
        assert_eq!(money_from_decimal(4.0), Money::from_cents(400));
        // Float representation error must not shift the cent.
        assert_eq!(money_from_decimal(17.949999999999999), Money::from_cents(1795));
        assert_eq!(money_from_decimal(20.950000000000003), Money::from_cents(2095));
    }

    #[test]
    fn test_combo_dto_decodes_observed_shape() {
        let json = r#"{
            "id": 2,
            "name": "Dinner for Two",
            "description": "Two entrees with your choice of base",
            "base_price": 22.95,
            "base_items": 4,
            "spring_rolls_included": 2,
            "additional_item_price": 4.00
        }"#;

        let dto: ComboDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, 2);
        assert_eq!(dto.spring_rolls_included, Some(2));
        assert_eq!(dto.additional_item_price, Some(4.00));
    }

    #[test]
    fn test_combo_with_items_envelope() {
        let json = r#"{
            "combo": {
                "id": 1,
                "name": "Combination for One",
                "base_price": 17.95,
                "base_items": 3,
                "spring_rolls_included": 1,
                "additional_item_price": 7.00
            },
            "availableItems": [
                {"menu_item_id": 11, "item_name": "Ginger Beef", "is_entree": true},
                {"menu_item_id": 21, "item_name": "Chicken Chow Mein", "is_entree": false}
            ]
        }"#;

        let dto: ComboWithItemsDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.available_items.len(), 2);
        assert!(dto.available_items[0].is_entree);
        assert!(!dto.available_items[1].is_entree);
    }

    #[test]
    fn test_menu_item_dto_defaults() {
        let json = r#"{"id": 31, "name": "Wonton Soup", "price": 8.95}"#;
        let dto: MenuItemDto = serde_json::from_str(json).unwrap();
        assert!(dto.is_available);
        assert!(dto.image_url.is_none());
    }
}
