//! # Cart State
//!
//! Shared ownership wrapper for the session's one cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`: operations may be issued from
//! concurrent handlers, but there is exactly one cart per session and each
//! mutation runs to completion under the lock. Locks are held only for the
//! closure's duration.

use std::sync::{Arc, Mutex};

use goldwok_core::cart::Cart;

/// Session-managed cart state.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Creates cart state seeded from a restored snapshot.
    pub fn from_cart(cart: Cart) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let subtotal = cart_state.with_cart(|cart| cart.subtotal());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&item));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goldwok_core::catalog::ItemId;
    use goldwok_core::menu::MenuItem;
    use goldwok_core::money::Money;

    fn item() -> MenuItem {
        MenuItem {
            id: ItemId(31),
            name: "Wonton Soup".to_string(),
            description: None,
            price: Money::from_cents(895),
            category_id: 2,
            image_url: None,
            is_available: true,
        }
    }

    #[test]
    fn test_with_cart_mut_mutates_shared_state() {
        let state = CartState::new();
        state.with_cart_mut(|cart| cart.add_item(&item()));

        assert_eq!(state.with_cart(|cart| cart.total_quantity()), 1);
    }

    #[test]
    fn test_clones_share_the_same_cart() {
        let state = CartState::new();
        let other = state.clone();

        state.with_cart_mut(|cart| cart.add_item(&item()));
        assert_eq!(other.with_cart(|cart| cart.total_quantity()), 1);
    }
}
