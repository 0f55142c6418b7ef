//! Integration tests for Velvet Cactus.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p velvet-cactus-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_flows` - Cart, wishlist, and sign-in lifecycles
//! - `catalog_listing` - Filtering and sorting over the bundled catalog
//! - `checkout_flow` - Totals and simulated order placement
//!
//! The helpers below load the bundled demo catalog (12 products across 6
//! categories) and build the demo user every scenario signs in with.

#![cfg_attr(not(test), forbid(unsafe_code))]

use velvet_cactus_core::{ProductId, UserId};
use velvet_cactus_storefront::catalog::Catalog;
use velvet_cactus_storefront::models::{Address, Product, User};

/// Load the bundled demo catalog.
///
/// # Panics
///
/// Panics if the bundled catalog fails validation, which would be a
/// packaging defect.
#[must_use]
pub fn demo_catalog() -> Catalog {
    Catalog::bundled().unwrap_or_else(|e| panic!("bundled catalog is invalid: {e}"))
}

/// Fetch a product from the catalog by ID, panicking when absent.
///
/// # Panics
///
/// Panics if the catalog has no product with the given ID.
#[must_use]
pub fn product(catalog: &Catalog, id: &str) -> Product {
    let id = ProductId::new(id);
    catalog
        .get(&id)
        .cloned()
        .unwrap_or_else(|| panic!("demo catalog is missing product {id}"))
}

/// The demo account scenarios sign in with.
#[must_use]
pub fn demo_user() -> User {
    User {
        id: UserId::new("1"),
        name: "John Doe".to_owned(),
        email: "john.doe@example.com".to_owned(),
        avatar: None,
        phone: Some("+1 (555) 123-4567".to_owned()),
        address: Some(Address {
            street: "123 Main St".to_owned(),
            city: "New York".to_owned(),
            state: "NY".to_owned(),
            zip_code: "10001".to_owned(),
            country: "United States".to_owned(),
        }),
    }
}
