//! Product listing derivation.
//!
//! Given the catalog, a free-text query, a filter set, and a sort order,
//! derive the ordered product list a page should render. Everything here is
//! a pure function: no state is held between calls, and the same inputs
//! always produce the same output in the same order, so callers simply
//! recompute whenever an input changes.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use velvet_cactus_core::{Price, Rating};

use crate::models::Product;

/// Default upper bound of the price filter.
const DEFAULT_MAX_PRICE_CENTS: u64 = 100_000;

/// The conjunctive filter configuration applied before sorting.
///
/// A product must satisfy every active predicate to appear in the listing.
/// The default filter set passes every product priced up to $1000.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilters {
    /// Selected category names; empty means no category restriction.
    pub categories: Vec<String>,
    /// Inclusive lower price bound.
    pub min_price: Price,
    /// Inclusive upper price bound.
    pub max_price: Price,
    /// Minimum rating; zero means no rating restriction.
    pub min_rating: Rating,
    /// When set, only in-stock products pass.
    pub in_stock_only: bool,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            min_price: Price::ZERO,
            max_price: Price::from_cents(DEFAULT_MAX_PRICE_CENTS),
            min_rating: Rating::MIN,
            in_stock_only: false,
        }
    }
}

impl ListingFilters {
    /// Whether the price range differs from the default.
    #[must_use]
    pub fn has_custom_price_range(&self) -> bool {
        self.min_price != Price::ZERO
            || self.max_price != Price::from_cents(DEFAULT_MAX_PRICE_CENTS)
    }

    /// Human-readable labels for the active (non-default) filters, in the
    /// order a badge row would render them.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.categories.clone();
        if !self.min_rating.is_zero() {
            labels.push(format!("{}+ stars", self.min_rating));
        }
        if self.in_stock_only {
            labels.push("In Stock".to_owned());
        }
        if self.has_custom_price_range() {
            labels.push(format!("{}-{}", self.min_price, self.max_price));
        }
        labels
    }
}

/// Error returned when parsing an unknown sort order name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0}. Valid orders: featured, price-low, price-high, rating, newest")]
pub struct ParseSortOrderError(String);

/// How a listing is ordered after filtering.
///
/// The sort is stable: products that compare equal keep their catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Featured products first; ties broken by descending rating.
    #[default]
    Featured,
    /// Ascending price.
    PriceLow,
    /// Descending price.
    PriceHigh,
    /// Descending rating.
    Rating,
    /// Catalog order. Products carry no creation timestamp, so there is
    /// nothing newer to surface; the stable sort keeps the incoming order.
    Newest,
}

impl SortOrder {
    /// Stable name, matching what [`FromStr`] accepts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            "newest" => Ok(Self::Newest),
            other => Err(ParseSortOrderError(other.to_owned())),
        }
    }
}

/// Derive the listing: filter by query and filter set, then sort.
///
/// Products are returned by value so the caller holds an independent
/// snapshot; the input slice is never mutated.
#[must_use]
pub fn select(
    products: &[Product],
    query: &str,
    filters: &ListingFilters,
    sort: SortOrder,
) -> Vec<Product> {
    let needle = query.trim().to_lowercase();

    let mut listing: Vec<Product> = products
        .iter()
        .filter(|product| matches_query(product, &needle) && matches_filters(product, filters))
        .cloned()
        .collect();

    // Vec::sort_by is stable, which the featured/rating/newest comparators
    // rely on for their ties.
    listing.sort_by(|a, b| compare(a, b, sort));
    listing
}

/// Whether a single product passes the query and every active filter.
#[must_use]
pub fn matches(product: &Product, query: &str, filters: &ListingFilters) -> bool {
    matches_query(product, &query.trim().to_lowercase()) && matches_filters(product, filters)
}

/// Case-insensitive substring match against name, category, or description.
/// The needle must already be trimmed and lowercased; an empty needle
/// matches everything.
fn matches_query(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

fn matches_filters(product: &Product, filters: &ListingFilters) -> bool {
    let matches_category =
        filters.categories.is_empty() || filters.categories.contains(&product.category);

    // An inverted range (min above max) is unsatisfiable and yields an
    // empty listing rather than an error.
    let matches_price =
        product.price >= filters.min_price && product.price <= filters.max_price;

    let matches_rating = filters.min_rating.is_zero() || product.rating >= filters.min_rating;

    let matches_stock = !filters.in_stock_only || product.in_stock;

    matches_category && matches_price && matches_rating && matches_stock
}

fn compare(a: &Product, b: &Product, sort: SortOrder) -> Ordering {
    match sort {
        SortOrder::Featured => b
            .featured
            .cmp(&a.featured)
            .then_with(|| b.rating.cmp(&a.rating)),
        SortOrder::PriceLow => a.price.cmp(&b.price),
        SortOrder::PriceHigh => b.price.cmp(&a.price),
        SortOrder::Rating => b.rating.cmp(&a.rating),
        SortOrder::Newest => Ordering::Equal,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use velvet_cactus_core::ProductId;

    use super::*;

    struct Blueprint<'a> {
        id: &'a str,
        name: &'a str,
        price: &'a str,
        category: &'a str,
        rating: &'a str,
        in_stock: bool,
        featured: bool,
    }

    fn product(blueprint: &Blueprint<'_>) -> Product {
        Product {
            id: ProductId::new(blueprint.id),
            name: blueprint.name.to_owned(),
            price: Price::parse(blueprint.price).unwrap(),
            original_price: None,
            image: String::new(),
            category: blueprint.category.to_owned(),
            rating: Rating::parse(blueprint.rating).unwrap(),
            reviews: 0,
            description: format!("A fine {}.", blueprint.name.to_lowercase()),
            in_stock: blueprint.in_stock,
            featured: blueprint.featured,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(&Blueprint {
                id: "1",
                name: "Wireless Headphones",
                price: "299.99",
                category: "Electronics",
                rating: "4.8",
                in_stock: true,
                featured: true,
            }),
            product(&Blueprint {
                id: "2",
                name: "Leather Jacket",
                price: "249.99",
                category: "Fashion",
                rating: "4.6",
                in_stock: true,
                featured: false,
            }),
            product(&Blueprint {
                id: "3",
                name: "Fitness Watch",
                price: "199.99",
                category: "Electronics",
                rating: "4.5",
                in_stock: false,
                featured: false,
            }),
            product(&Blueprint {
                id: "4",
                name: "Desk Speaker",
                price: "99.99",
                category: "Electronics",
                rating: "4.8",
                in_stock: true,
                featured: true,
            }),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let listing = select(&fixture(), "", &ListingFilters::default(), SortOrder::Newest);
        assert_eq!(listing.len(), 4);
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let listing = select(&fixture(), "   ", &ListingFilters::default(), SortOrder::Newest);
        assert_eq!(listing.len(), 4);
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let listing = select(
            &fixture(),
            "LEATHER",
            &ListingFilters::default(),
            SortOrder::Newest,
        );
        assert_eq!(ids(&listing), vec!["2"]);
    }

    #[test]
    fn test_query_matches_category_and_description() {
        // "fashion" only appears as a category
        let by_category = select(
            &fixture(),
            "fashion",
            &ListingFilters::default(),
            SortOrder::Newest,
        );
        assert_eq!(ids(&by_category), vec!["2"]);

        // "fine" only appears in descriptions
        let by_description = select(
            &fixture(),
            "fine",
            &ListingFilters::default(),
            SortOrder::Newest,
        );
        assert_eq!(by_description.len(), 4);
    }

    #[test]
    fn test_category_filter() {
        let filters = ListingFilters {
            categories: vec!["Electronics".to_owned()],
            ..ListingFilters::default()
        };
        let listing = select(&fixture(), "", &filters, SortOrder::Newest);
        assert_eq!(ids(&listing), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filters = ListingFilters {
            min_price: Price::parse("99.99").unwrap(),
            max_price: Price::parse("199.99").unwrap(),
            ..ListingFilters::default()
        };
        let listing = select(&fixture(), "", &filters, SortOrder::Newest);
        assert_eq!(ids(&listing), vec!["3", "4"]);
    }

    #[test]
    fn test_inverted_price_range_yields_empty_listing() {
        let filters = ListingFilters {
            min_price: Price::parse("500").unwrap(),
            max_price: Price::parse("100").unwrap(),
            ..ListingFilters::default()
        };
        let listing = select(&fixture(), "", &filters, SortOrder::Newest);
        assert!(listing.is_empty());
    }

    #[test]
    fn test_rating_threshold() {
        let filters = ListingFilters {
            min_rating: Rating::parse("4.7").unwrap(),
            ..ListingFilters::default()
        };
        let listing = select(&fixture(), "", &filters, SortOrder::Newest);
        assert_eq!(ids(&listing), vec!["1", "4"]);
    }

    #[test]
    fn test_zero_rating_threshold_passes_all() {
        let filters = ListingFilters {
            min_rating: Rating::MIN,
            ..ListingFilters::default()
        };
        let listing = select(&fixture(), "", &filters, SortOrder::Newest);
        assert_eq!(listing.len(), 4);
    }

    #[test]
    fn test_in_stock_filter() {
        let filters = ListingFilters {
            in_stock_only: true,
            ..ListingFilters::default()
        };
        let listing = select(&fixture(), "", &filters, SortOrder::Newest);
        assert_eq!(ids(&listing), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let filters = ListingFilters {
            categories: vec!["Electronics".to_owned()],
            max_price: Price::parse("300").unwrap(),
            in_stock_only: true,
            ..ListingFilters::default()
        };
        let listing = select(&fixture(), "", &filters, SortOrder::Newest);
        // "3" fails the stock gate even though category and price pass
        assert_eq!(ids(&listing), vec!["1", "4"]);
    }

    #[test]
    fn test_sort_featured_puts_featured_first_then_rating() {
        let listing = select(&fixture(), "", &ListingFilters::default(), SortOrder::Featured);
        // Featured: 1 and 4 (both 4.8, stable tie keeps catalog order),
        // then non-featured by descending rating: 2 (4.6), 3 (4.5)
        assert_eq!(ids(&listing), vec!["1", "4", "2", "3"]);
    }

    #[test]
    fn test_sort_featured_equal_ratings_is_stable() {
        let listing = select(&fixture(), "", &ListingFilters::default(), SortOrder::Featured);
        let featured: Vec<&str> = listing
            .iter()
            .filter(|p| p.featured)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(featured, vec!["1", "4"]);
    }

    #[test]
    fn test_sort_by_price() {
        let low = select(&fixture(), "", &ListingFilters::default(), SortOrder::PriceLow);
        assert_eq!(ids(&low), vec!["4", "3", "2", "1"]);

        let high = select(&fixture(), "", &ListingFilters::default(), SortOrder::PriceHigh);
        assert_eq!(ids(&high), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let listing = select(&fixture(), "", &ListingFilters::default(), SortOrder::Rating);
        // 1 and 4 tie at 4.8; stability keeps catalog order
        assert_eq!(ids(&listing), vec!["1", "4", "2", "3"]);
    }

    #[test]
    fn test_sort_newest_keeps_catalog_order() {
        let listing = select(&fixture(), "", &ListingFilters::default(), SortOrder::Newest);
        assert_eq!(ids(&listing), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_sort_order_parse_roundtrip() {
        for sort in [
            SortOrder::Featured,
            SortOrder::PriceLow,
            SortOrder::PriceHigh,
            SortOrder::Rating,
            SortOrder::Newest,
        ] {
            assert_eq!(sort.as_str().parse::<SortOrder>().unwrap(), sort);
        }
        assert!("best-sellers".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_filter_summary() {
        let filters = ListingFilters {
            categories: vec!["Electronics".to_owned()],
            min_rating: Rating::parse("4").unwrap(),
            in_stock_only: true,
            max_price: Price::parse("300").unwrap(),
            ..ListingFilters::default()
        };
        assert_eq!(
            filters.summary(),
            vec!["Electronics", "4+ stars", "In Stock", "$0.00-$300.00"]
        );

        assert!(ListingFilters::default().summary().is_empty());
    }

    #[test]
    fn test_matches_single_product() {
        let products = fixture();
        let first = products.first().unwrap();
        assert!(matches(first, "wireless", &ListingFilters::default()));
        assert!(!matches(first, "jacket", &ListingFilters::default()));
    }
}
