//! The session state aggregate and its derived queries.

use velvet_cactus_core::{Price, ProductId};

use crate::models::{CartItem, Product, User};

/// Everything a session holds.
///
/// Mutated only by [`super::SessionStore::dispatch`]; readers get shared
/// references and must treat the snapshot as read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Cart lines in first-added order. At most one line per product ID;
    /// re-adding an existing product increments its quantity in place.
    pub cart: Vec<CartItem>,
    /// Wishlisted products in insertion order, unique by product ID.
    pub wishlist: Vec<Product>,
    /// Whether the cart panel is shown.
    pub is_cart_open: bool,
    /// The signed-in user, if any.
    pub user: Option<User>,
    /// Whether a user is signed in. Always `user.is_some()`.
    pub is_authenticated: bool,
}

impl AppState {
    /// Total number of units across all cart lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.cart.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of unit price times quantity across all cart lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.iter().map(CartItem::line_total).sum()
    }

    /// Whether the wishlist contains a product with this ID.
    #[must_use]
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.wishlist.iter().any(|product| &product.id == id)
    }

    /// Look up a cart line by product ID.
    #[must_use]
    pub fn cart_item(&self, id: &ProductId) -> Option<&CartItem> {
        self.cart.iter().find(|item| &item.product.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use velvet_cactus_core::Rating;

    use super::*;

    fn product(id: &str, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::parse(price).unwrap(),
            original_price: None,
            image: String::new(),
            category: "Electronics".to_owned(),
            rating: Rating::parse("4.0").unwrap(),
            reviews: 0,
            description: String::new(),
            in_stock: true,
            featured: false,
        }
    }

    #[test]
    fn test_totals_over_cart() {
        let state = AppState {
            cart: vec![
                CartItem {
                    product: product("a", "10"),
                    quantity: 2,
                },
                CartItem {
                    product: product("b", "5"),
                    quantity: 3,
                },
            ],
            ..AppState::default()
        };

        assert_eq!(state.total_items(), 5);
        assert_eq!(state.total_price(), Price::parse("35.00").unwrap());
    }

    #[test]
    fn test_totals_on_empty_cart() {
        let state = AppState::default();
        assert_eq!(state.total_items(), 0);
        assert_eq!(state.total_price(), Price::ZERO);
    }

    #[test]
    fn test_is_in_wishlist() {
        let state = AppState {
            wishlist: vec![product("a", "10")],
            ..AppState::default()
        };

        assert!(state.is_in_wishlist(&ProductId::new("a")));
        assert!(!state.is_in_wishlist(&ProductId::new("b")));
    }
}
