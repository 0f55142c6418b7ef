//! Product catalog loading and access.
//!
//! The catalog is an immutable, in-memory product list loaded once per
//! process, either from a JSON document on disk or from the bundled demo
//! data. The document is validated at load; everything downstream (the
//! listing engine, the session store) can assume well-formed products.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use velvet_cactus_core::ProductId;

use crate::models::Product;

/// Bundled demo catalog, used when no catalog path is configured.
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Errors that can occur when loading a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid catalog JSON.
    #[error("Failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share an ID.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// A product references a category the document does not declare.
    #[error("Product {id} has unknown category: {category}")]
    UnknownCategory {
        /// Offending product.
        id: ProductId,
        /// The undeclared category name.
        category: String,
    },

    /// A sale product whose original price does not exceed its current price.
    #[error("Product {0} has an original price at or below its current price")]
    SalePriceNotAbove(ProductId),
}

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    categories: Vec<String>,
    products: Vec<Product>,
}

/// The immutable product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog from already-parsed parts, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if product IDs are not unique, a product references
    /// an undeclared category, or a sale price is not above the current
    /// price.
    pub fn from_products(
        products: Vec<Product>,
        categories: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let known: HashSet<&str> = categories.iter().map(String::as_str).collect();
        let mut seen: HashSet<&ProductId> = HashSet::new();

        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            if !known.contains(product.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    id: product.id.clone(),
                    category: product.category.clone(),
                });
            }
            if let Some(original) = product.original_price
                && original <= product.price
            {
                return Err(CatalogError::SalePriceNotAbove(product.id.clone()));
            }
        }

        Ok(Self {
            products,
            categories,
        })
    }

    /// Parse and validate a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a catalog invariant is
    /// violated.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_products(document.products, document.categories)
    }

    /// Load the bundled demo catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled document fails validation; this
    /// indicates a packaging defect, not a runtime condition.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Load a catalog from a JSON file, or the bundled demo catalog when no
    /// path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let catalog = Self::from_json_str(&json)?;
                tracing::info!(
                    path = %path.display(),
                    products = catalog.products.len(),
                    "Loaded catalog from file"
                );
                catalog
            }
            None => {
                let catalog = Self::bundled()?;
                tracing::info!(products = catalog.products.len(), "Loaded bundled catalog");
                catalog
            }
        };
        Ok(catalog)
    }

    /// All products, in document order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Declared category names, in document order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Products flagged as featured, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products currently on sale, in catalog order.
    #[must_use]
    pub fn on_sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_on_sale()).collect()
    }

    /// Product count per declared category, in category order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(&str, usize)> {
        self.categories
            .iter()
            .map(|category| {
                let count = self
                    .products
                    .iter()
                    .filter(|p| &p.category == category)
                    .count();
                (category.as_str(), count)
            })
            .collect()
    }
}
