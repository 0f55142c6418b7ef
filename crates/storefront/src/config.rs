//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VC_CATALOG_PATH` - Path to a catalog JSON document
//!   (default: the bundled demo catalog)
//! - `VC_TAX_RATE` - Tax as a decimal fraction (default: 0.08)
//! - `VC_FREE_SHIPPING_THRESHOLD` - Subtotal above which shipping is free
//!   (default: 50)
//! - `VC_FLAT_SHIPPING` - Flat shipping charge below the threshold
//!   (default: 9.99)

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

use velvet_cactus_core::Price;

use crate::checkout::CheckoutRates;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Catalog JSON document to load; `None` means the bundled demo catalog.
    pub catalog_path: Option<PathBuf>,
    /// Tax as a decimal fraction of the subtotal.
    pub tax_rate: Decimal,
    /// Subtotal above which shipping is free.
    pub free_shipping_threshold: Price,
    /// Flat shipping charge below the threshold.
    pub flat_shipping: Price,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let rates = CheckoutRates::default();
        Self {
            catalog_path: None,
            tax_rate: rates.tax_rate,
            free_shipping_threshold: rates.free_shipping_threshold,
            flat_shipping: rates.flat_shipping,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_path = lookup("VC_CATALOG_PATH").map(PathBuf::from);

        let tax_rate = match lookup("VC_TAX_RATE") {
            Some(raw) => parse_rate("VC_TAX_RATE", &raw)?,
            None => defaults.tax_rate,
        };

        let free_shipping_threshold = match lookup("VC_FREE_SHIPPING_THRESHOLD") {
            Some(raw) => parse_price("VC_FREE_SHIPPING_THRESHOLD", &raw)?,
            None => defaults.free_shipping_threshold,
        };

        let flat_shipping = match lookup("VC_FLAT_SHIPPING") {
            Some(raw) => parse_price("VC_FLAT_SHIPPING", &raw)?,
            None => defaults.flat_shipping,
        };

        Ok(Self {
            catalog_path,
            tax_rate,
            free_shipping_threshold,
            flat_shipping,
        })
    }

    /// The shipping and tax parameters for checkout.
    #[must_use]
    pub const fn checkout_rates(&self) -> CheckoutRates {
        CheckoutRates {
            free_shipping_threshold: self.free_shipping_threshold,
            flat_shipping: self.flat_shipping,
            tax_rate: self.tax_rate,
        }
    }
}

fn parse_price(key: &str, raw: &str) -> Result<Price, ConfigError> {
    Price::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
}

fn parse_rate(key: &str, raw: &str) -> Result<Decimal, ConfigError> {
    let rate: Decimal = raw.trim().parse().map_err(|_| {
        ConfigError::InvalidEnvVar(key.to_owned(), format!("not a decimal number: {raw}"))
    })?;
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            format!("rate cannot be negative: {raw}"),
        ));
    }
    Ok(rate)
}
