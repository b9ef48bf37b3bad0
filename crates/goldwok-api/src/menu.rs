//! # Menu Fetch
//!
//! Retrieves the category-keyed menu and the category list, mapping wire
//! prices to integer cents on the way in.

use tracing::debug;

use goldwok_core::catalog::ItemId;
use goldwok_core::menu::{Category, MenuByCategory, MenuItem};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::wire::{money_from_decimal, CategoriesEnvelopeDto, MenuEnvelopeDto, MenuItemDto};

/// The full menu, grouped by category key (`GET /menu`).
pub async fn fetch_menu(client: &ApiClient) -> ApiResult<MenuByCategory> {
    let envelope: MenuEnvelopeDto = client.get("/menu").await?;

    let menu: MenuByCategory = envelope
        .menu
        .into_iter()
        .map(|(key, items)| (key, items.into_iter().map(item_from_wire).collect()))
        .collect();

    debug!(categories = menu.len(), "fetched menu");
    Ok(menu)
}

/// Active menu categories (`GET /menu/categories`).
pub async fn fetch_categories(client: &ApiClient) -> ApiResult<Vec<Category>> {
    let envelope: CategoriesEnvelopeDto = client.get("/menu/categories").await?;
    debug!(count = envelope.categories.len(), "fetched categories");

    Ok(envelope
        .categories
        .into_iter()
        .map(|dto| Category {
            id: dto.id,
            name: dto.name,
            display_order: dto.display_order,
            is_active: dto.is_active,
        })
        .collect())
}

fn item_from_wire(dto: MenuItemDto) -> MenuItem {
    MenuItem {
        id: ItemId(dto.id),
        name: dto.name,
        description: dto.description,
        price: money_from_decimal(dto.price),
        category_id: dto.category_id,
        image_url: dto.image_url,
        is_available: dto.is_available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldwok_core::money::Money;

    #[test]
    fn test_item_from_wire_converts_price_once() {
        let dto: MenuItemDto = serde_json::from_str(
            r#"{"id": 31, "name": "Wonton Soup", "price": 8.95, "categoryId": 2}"#,
        )
        .unwrap();

        let item = item_from_wire(dto);
        assert_eq!(item.id, ItemId(31));
        assert_eq!(item.price, Money::from_cents(895));
        assert_eq!(item.category_id, 2);
        assert!(item.is_available);
    }

    #[test]
    fn test_menu_envelope_mapping() {
        let envelope: MenuEnvelopeDto = serde_json::from_str(
            r#"{
                "restaurant": {"name": "Golden Chopsticks"},
                "menu": {
                    "soup": [{"id": 31, "name": "Wonton Soup", "price": 8.95}],
                    "appetizers": []
                },
                "itemCount": 1
            }"#,
        )
        .unwrap();

        let menu: MenuByCategory = envelope
            .menu
            .into_iter()
            .map(|(key, items)| (key, items.into_iter().map(item_from_wire).collect()))
            .collect();

        assert_eq!(menu["soup"].len(), 1);
        assert!(menu["appetizers"].is_empty());
    }
}
