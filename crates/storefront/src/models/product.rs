//! Product domain types.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use velvet_cactus_core::{Price, ProductId, Rating};

/// A catalog entry.
///
/// Products are owned by the [`crate::catalog::Catalog`] and never mutated;
/// the cart and wishlist hold copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current selling price.
    pub price: Price,
    /// Pre-sale price, present only while the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Product image URI.
    pub image: String,
    /// Category name; must be one of the catalog's categories.
    pub category: String,
    /// Average customer rating.
    pub rating: Rating,
    /// Number of customer reviews.
    pub reviews: u32,
    /// Short marketing description.
    pub description: String,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
    /// Whether the product is featured on the landing page.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Whether the product is currently on sale.
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// Discount as a whole percentage of the original price.
    ///
    /// Returns `None` when the product is not on sale.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        let saved = original.checked_sub(self.price)?;
        let fraction = saved.amount().checked_div(original.amount())?;
        (fraction * Decimal::ONE_HUNDRED).round().to_u32()
    }

    /// Amount saved versus the original price.
    ///
    /// Returns `None` when the product is not on sale.
    #[must_use]
    pub fn savings(&self) -> Option<Price> {
        self.original_price?.checked_sub(self.price)
    }
}

/// A product in the cart together with its quantity.
///
/// The cart holds at most one `CartItem` per product ID and the quantity is
/// always at least one; an item whose quantity drops to zero is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product being purchased.
    pub product: Product,
    /// How many units are in the cart.
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sale_product() -> Product {
        Product {
            id: ProductId::new("p-1"),
            name: "Premium Wireless Headphones".to_owned(),
            price: Price::parse("299.99").unwrap(),
            original_price: Some(Price::parse("399.99").unwrap()),
            image: "https://example.com/p-1.jpg".to_owned(),
            category: "Electronics".to_owned(),
            rating: Rating::parse("4.8").unwrap(),
            reviews: 156,
            description: "High-quality wireless headphones.".to_owned(),
            in_stock: true,
            featured: true,
        }
    }

    #[test]
    fn test_discount_percent() {
        let product = sale_product();
        // (399.99 - 299.99) / 399.99 = 25.0006...%
        assert_eq!(product.discount_percent(), Some(25));
    }

    #[test]
    fn test_savings() {
        let product = sale_product();
        assert_eq!(product.savings(), Some(Price::parse("100.00").unwrap()));
    }

    #[test]
    fn test_not_on_sale() {
        let product = Product {
            original_price: None,
            ..sale_product()
        };
        assert!(!product.is_on_sale());
        assert_eq!(product.discount_percent(), None);
        assert_eq!(product.savings(), None);
    }

    #[test]
    fn test_line_total() {
        let item = CartItem {
            product: sale_product(),
            quantity: 3,
        };
        assert_eq!(item.line_total(), Price::parse("899.97").unwrap());
    }

    #[test]
    fn test_featured_defaults_false_in_json() {
        let json = r#"{
            "id": "p-9",
            "name": "Plain Product",
            "price": "10.00",
            "image": "https://example.com/p-9.jpg",
            "category": "Electronics",
            "rating": "4.0",
            "reviews": 1,
            "description": "A product.",
            "in_stock": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.featured);
        assert_eq!(product.original_price, None);
    }
}
