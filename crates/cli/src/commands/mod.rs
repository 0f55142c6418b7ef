//! CLI command implementations.

pub mod catalog;
pub mod demo;

/// Errors surfaced by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] velvet_cactus_storefront::config::ConfigError),

    /// The catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] velvet_cactus_storefront::catalog::CatalogError),

    /// Checkout failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] velvet_cactus_storefront::checkout::CheckoutError),

    /// JSON output could not be produced.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The demo script references a product the loaded catalog lacks.
    #[error("Demo product not in catalog: {0}")]
    MissingDemoProduct(velvet_cactus_core::ProductId),
}
