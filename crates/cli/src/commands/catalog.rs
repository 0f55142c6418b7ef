//! Catalog browsing commands.

use velvet_cactus_core::{Price, Rating};
use velvet_cactus_storefront::catalog::Catalog;
use velvet_cactus_storefront::config::StorefrontConfig;
use velvet_cactus_storefront::listing::{self, ListingFilters, SortOrder};

use super::CommandError;

/// Options for `vc-cli catalog list`.
pub struct ListOptions {
    pub query: String,
    pub categories: Vec<String>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub min_rating: Option<Rating>,
    pub in_stock: bool,
    pub sort: SortOrder,
    pub json: bool,
}

/// Filter and sort the product listing, then print it.
///
/// # Errors
///
/// Returns an error if configuration, catalog loading, or JSON output fails.
pub fn list(options: &ListOptions) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let catalog = Catalog::load(config.catalog_path.as_deref())?;

    let defaults = ListingFilters::default();
    let filters = ListingFilters {
        categories: options.categories.clone(),
        min_price: options.min_price.unwrap_or(defaults.min_price),
        max_price: options.max_price.unwrap_or(defaults.max_price),
        min_rating: options.min_rating.unwrap_or(defaults.min_rating),
        in_stock_only: options.in_stock,
    };

    let products = listing::select(catalog.products(), &options.query, &filters, options.sort);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    let active = filters.summary();
    if !active.is_empty() {
        println!("Active filters: {}", active.join(", "));
    }

    let query = options.query.trim();
    if query.is_empty() {
        println!("{} products found", products.len());
    } else {
        println!("{} products found for \"{query}\"", products.len());
    }

    for product in &products {
        let sale = product
            .discount_percent()
            .zip(product.original_price)
            .map(|(percent, original)| format!("  (was {original}, save {percent}%)"))
            .unwrap_or_default();
        let stock = if product.in_stock {
            ""
        } else {
            "  [out of stock]"
        };

        println!(
            "{:<28} {:>9}  {:<12} {} stars ({} reviews){sale}{stock}",
            product.name,
            product.price.to_string(),
            product.category,
            product.rating,
            product.reviews,
        );
    }

    Ok(())
}

/// Print category names with product counts.
///
/// # Errors
///
/// Returns an error if configuration or catalog loading fails.
pub fn categories() -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let catalog = Catalog::load(config.catalog_path.as_deref())?;

    for (name, count) in catalog.category_counts() {
        println!("{name:<16} {count:>3}");
    }

    Ok(())
}
