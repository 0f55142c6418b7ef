//! Scripted shopping session.
//!
//! Walks one session through the whole storefront core: sign in, browse the
//! listing, fill the cart, round-trip the wishlist, and place a simulated
//! order. Useful as a smoke test and as an executable tour of the API.

use velvet_cactus_core::{Price, ProductId, UserId};
use velvet_cactus_storefront::catalog::Catalog;
use velvet_cactus_storefront::checkout;
use velvet_cactus_storefront::config::StorefrontConfig;
use velvet_cactus_storefront::listing::{self, ListingFilters, SortOrder};
use velvet_cactus_storefront::models::{Address, Product, User, UserUpdate};
use velvet_cactus_storefront::session::SessionStore;

use super::CommandError;

/// The demo account used for the mock sign-in.
fn demo_user() -> User {
    User {
        id: UserId::new("1"),
        name: "John Doe".to_owned(),
        email: "john.doe@example.com".to_owned(),
        avatar: Some(
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face"
                .to_owned(),
        ),
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

fn require(catalog: &Catalog, id: &str) -> Result<Product, CommandError> {
    let id = ProductId::new(id);
    catalog
        .get(&id)
        .cloned()
        .ok_or(CommandError::MissingDemoProduct(id))
}

/// Run the scripted session.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, a product the script
/// relies on is missing, or order placement fails.
pub fn run() -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    let rates = config.checkout_rates();
    let mut store = SessionStore::new();

    println!("== Sign in ==");
    store.login(demo_user());
    store.update_user(UserUpdate {
        phone: Some("+1 (555) 987-6543".to_owned()),
        ..UserUpdate::default()
    });
    if let Some(user) = &store.state().user {
        println!("Signed in as {} <{}>", user.name, user.email);
    }

    println!();
    println!("== Featured products ==");
    for product in catalog.featured().into_iter().take(4) {
        println!("  {} ({})", product.name, product.price);
    }

    println!();
    println!("== Browse: \"wireless\", Electronics up to $300, in stock ==");
    let filters = ListingFilters {
        categories: vec!["Electronics".to_owned()],
        max_price: Price::from_cents(30_000),
        in_stock_only: true,
        ..ListingFilters::default()
    };
    let browse = listing::select(catalog.products(), "wireless", &filters, SortOrder::PriceLow);
    for product in &browse {
        println!("  {} ({})", product.name, product.price);
    }

    println!();
    println!("== Fill the cart ==");
    let headphones = require(&catalog, "1")?;
    let speaker = require(&catalog, "10")?;
    store.add_to_cart(headphones.clone());
    store.add_to_cart(headphones);
    store.add_to_cart(speaker);
    store.open_cart();
    println!(
        "Cart holds {} items, subtotal {}",
        store.total_items(),
        store.total_price()
    );

    println!();
    println!("== Wishlist round-trip ==");
    let perfume = require(&catalog, "5")?;
    let sunglasses = require(&catalog, "11")?;
    store.add_to_wishlist(perfume);
    store.add_to_wishlist(sunglasses.clone());
    store.add_to_wishlist(sunglasses); // second add is a no-op
    println!("Wishlist holds {} products", store.state().wishlist.len());

    store.move_to_cart(&ProductId::new("11"));
    store.move_to_cart(&ProductId::new("5")); // out of stock, stays wishlisted
    println!(
        "After moving: {} in wishlist, {} cart items",
        store.state().wishlist.len(),
        store.total_items()
    );

    println!();
    println!("== Adjust the cart ==");
    store.update_quantity(ProductId::new("1"), 1);
    store.remove_from_cart(ProductId::new("10"));
    println!(
        "Cart holds {} items, subtotal {}",
        store.total_items(),
        store.total_price()
    );

    println!();
    println!("== Checkout ==");
    let confirmation = checkout::place_order(&mut store, &rates)?;
    for line in &confirmation.lines {
        println!(
            "  {} x{} @ {} = {}",
            line.name, line.quantity, line.unit_price, line.line_total
        );
    }
    println!("  Subtotal {}", confirmation.totals.subtotal);
    println!("  Shipping {}", confirmation.totals.shipping);
    println!("  Tax      {}", confirmation.totals.tax);
    println!("  Total    {}", confirmation.totals.total);
    println!(
        "Order {} placed at {}",
        confirmation.order_number, confirmation.placed_at
    );

    println!();
    println!("== Sign out ==");
    store.logout();
    let state = store.state();
    println!(
        "Cart: {} items, wishlist: {} products, signed in: {}",
        state.cart.len(),
        state.wishlist.len(),
        state.is_authenticated
    );

    Ok(())
}
