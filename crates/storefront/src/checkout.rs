//! Order totals and simulated order placement.
//!
//! Checkout never talks to a payment provider. It reads the cart, computes
//! totals, and on success clears the cart and hands back a confirmation
//! the caller can render. Shipping and tax follow the store rules: orders
//! over the free-shipping threshold ship free, everything else pays a flat
//! rate, and tax is a percentage of the merchandise subtotal.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use velvet_cactus_core::{Price, ProductId};

use crate::session::SessionStore;

/// Errors that can occur when placing an order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    /// The cart has no lines to order.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,
}

/// Shipping and tax parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRates {
    /// Subtotals strictly above this ship free.
    pub free_shipping_threshold: Price,
    /// Flat shipping charge below the threshold.
    pub flat_shipping: Price,
    /// Tax as a fraction of the subtotal (e.g. `0.08` for 8%).
    pub tax_rate: Decimal,
}

impl Default for CheckoutRates {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Price::from_cents(5_000),
            flat_shipping: Price::from_cents(999),
            tax_rate: Decimal::new(8, 2),
        }
    }
}

/// The money breakdown of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    /// Merchandise subtotal.
    pub subtotal: Price,
    /// Shipping charge.
    pub shipping: Price,
    /// Tax, rounded to whole cents.
    pub tax: Price,
    /// Grand total.
    pub total: Price,
}

impl OrderTotals {
    /// Compute totals for a merchandise subtotal under the given rates.
    #[must_use]
    pub fn for_subtotal(subtotal: Price, rates: &CheckoutRates) -> Self {
        let shipping = if subtotal > rates.free_shipping_threshold {
            Price::ZERO
        } else {
            rates.flat_shipping
        };
        let tax = subtotal
            .scale(rates.tax_rate)
            .unwrap_or_default()
            .round_cents();

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// A snapshot of one cart line at the moment the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    /// Product ordered.
    pub product_id: ProductId,
    /// Product name at order time.
    pub name: String,
    /// Unit price at order time.
    pub unit_price: Price,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price times quantity.
    pub line_total: Price,
}

/// A placed (simulated) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    /// Human-friendly order reference.
    pub order_number: String,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Ordered lines, in cart order.
    pub lines: Vec<OrderLine>,
    /// Money breakdown.
    pub totals: OrderTotals,
}

/// Compute totals for the store's current cart.
#[must_use]
pub fn cart_totals(store: &SessionStore, rates: &CheckoutRates) -> OrderTotals {
    OrderTotals::for_subtotal(store.total_price(), rates)
}

/// Place an order for everything in the cart.
///
/// On success the cart is cleared and a confirmation with a line snapshot
/// is returned. The wishlist, the signed-in user, and the cart panel flag
/// are untouched.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] when there is nothing to order.
pub fn place_order(
    store: &mut SessionStore,
    rates: &CheckoutRates,
) -> Result<OrderConfirmation, CheckoutError> {
    if store.state().cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let lines: Vec<OrderLine> = store
        .state()
        .cart
        .iter()
        .map(|item| OrderLine {
            product_id: item.product.id.clone(),
            name: item.product.name.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
            line_total: item.line_total(),
        })
        .collect();

    let totals = cart_totals(store, rates);
    let confirmation = OrderConfirmation {
        order_number: new_order_number(),
        placed_at: Utc::now(),
        lines,
        totals,
    };

    store.clear_cart();
    info!(
        order_number = %confirmation.order_number,
        total = %confirmation.totals.total,
        "Order placed"
    );

    Ok(confirmation)
}

/// Generate an order reference like `VC-9F2A61B4`.
fn new_order_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    let fragment: String = id.chars().take(8).collect();
    format!("VC-{}", fragment.to_uppercase())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use velvet_cactus_core::Rating;

    use crate::models::Product;

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
    fn test_totals_below_free_shipping_threshold() {
        let totals = OrderTotals::for_subtotal(
            Price::parse("35.00").unwrap(),
            &CheckoutRates::default(),
        );

        assert_eq!(totals.shipping, Price::parse("9.99").unwrap());
        assert_eq!(totals.tax, Price::parse("2.80").unwrap());
        assert_eq!(totals.total, Price::parse("47.79").unwrap());
    }

    #[test]
    fn test_totals_at_threshold_still_pay_shipping() {
        // Free shipping requires a subtotal strictly above the threshold
        let totals = OrderTotals::for_subtotal(
            Price::parse("50.00").unwrap(),
            &CheckoutRates::default(),
        );
        assert_eq!(totals.shipping, Price::parse("9.99").unwrap());
    }

    #[test]
    fn test_totals_above_threshold_ship_free() {
        let totals = OrderTotals::for_subtotal(
            Price::parse("100.00").unwrap(),
            &CheckoutRates::default(),
        );

        assert_eq!(totals.shipping, Price::ZERO);
        assert_eq!(totals.tax, Price::parse("8.00").unwrap());
        assert_eq!(totals.total, Price::parse("108.00").unwrap());
    }

    #[test]
    fn test_place_order_on_empty_cart_fails() {
        let mut store = SessionStore::new();
        let result = place_order(&mut store, &CheckoutRates::default());
        assert_eq!(result, Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_place_order_snapshots_lines_and_clears_cart() {
        let mut store = SessionStore::new();
        store.add_to_cart(product("a", "10.00"));
        store.add_to_cart(product("a", "10.00"));
        store.add_to_cart(product("b", "5.00"));

        let confirmation = place_order(&mut store, &CheckoutRates::default()).unwrap();

        assert_eq!(confirmation.lines.len(), 2);
        let first = confirmation.lines.first().unwrap();
        assert_eq!(first.quantity, 2);
        assert_eq!(first.line_total, Price::parse("20.00").unwrap());
        assert_eq!(
            confirmation.totals.subtotal,
            Price::parse("25.00").unwrap()
        );

        // Cart is consumed by the order
        assert!(store.state().cart.is_empty());
    }

    #[test]
    fn test_place_order_leaves_rest_of_session_alone() {
        let mut store = SessionStore::new();
        store.add_to_wishlist(product("w", "1.00"));
        store.add_to_cart(product("a", "10.00"));
        store.open_cart();

        place_order(&mut store, &CheckoutRates::default()).unwrap();

        assert_eq!(store.state().wishlist.len(), 1);
        assert!(store.state().is_cart_open);
    }

    #[test]
    fn test_order_number_shape() {
        let number = new_order_number();
        assert!(number.starts_with("VC-"));
        assert_eq!(number.len(), 11);
        assert!(
            number
                .chars()
                .skip(3)
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }
}
