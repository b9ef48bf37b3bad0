//! # Menu Types
//!
//! Ordinary (non-combo) menu items and their categories, as served by the
//! remote menu API. The menu arrives keyed by category key ("appetizers",
//! "chowMein", ...); combos live in their own category and are customized
//! through [`crate::selection::ComboSession`] instead of added directly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

use crate::catalog::ItemId;
use crate::money::Money;

/// Category id of the combination dinners; items in this category open the
/// combo selector instead of an add-to-cart button.
pub const COMBINATIONS_CATEGORY_ID: i64 = 12;

// =============================================================================
// Menu Item
// =============================================================================

/// An ordinary menu item available for direct cart add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    /// Current catalog price; frozen onto the cart line at add time.
    pub price: Money,
    pub category_id: i64,
    pub image_url: Option<String>,
    pub is_available: bool,
}

// =============================================================================
// Category
// =============================================================================

/// A menu category (appetizers, soups, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub display_order: i64,
    pub is_active: bool,
}

// =============================================================================
// Category-keyed menu
// =============================================================================

/// The menu as returned by the API: items grouped under category keys.
pub type MenuByCategory = HashMap<String, Vec<MenuItem>>;

/// Maps a category id to the key the menu map uses for it.
///
/// Unknown ids fall through to `"other"`, matching how the menu service
/// groups uncategorized items.
pub fn category_key(category_id: i64) -> &'static str {
    match category_id {
        1 => "appetizers",
        2 => "soup",
        3 => "chowMein",
        4 => "friedRice",
        5 => "chopSuey",
        6 => "eggFooYoung",
        7 => "chicken",
        8 => "beef",
        9 => "pork",
        10 => "seafood",
        11 => "chefSpecialty",
        12 => "combinations",
        13 => "sauces",
        14 => "extras",
        _ => "other",
    }
}

/// Items for a category, empty when the menu has none.
pub fn category_items(menu: &MenuByCategory, category_id: i64) -> &[MenuItem] {
    menu.get(category_key(category_id))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

// =============================================================================
// Unit Tests
// =============================================================================
