//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are non-negative decimal amounts in the store currency (USD).
//! Binary floating point is never used for money; all arithmetic goes
//! through [`rust_decimal::Decimal`].

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
    /// The input string is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// A non-negative amount of money in the store currency.
///
/// ## Constraints
///
/// - Amount must be zero or positive
///
/// ## Examples
///
/// ```
/// use velvet_cactus_core::Price;
///
/// let price = Price::parse("19.99").unwrap();
/// assert_eq!(price.to_string(), "$19.99");
///
/// // Negative amounts are rejected
/// assert!(Price::parse("-1").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    ///
    /// ```
    /// use velvet_cactus_core::Price;
    ///
    /// assert_eq!(Price::from_cents(2499).to_string(), "$24.99");
    /// ```
    #[must_use]
    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::new(
            i64::try_from(cents).unwrap_or(i64::MAX),
            2,
        ))
    }

    /// Parse a `Price` from a decimal string such as `"299.99"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal number or is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount: Decimal = s
            .trim()
            .parse()
            .map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this price is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Scale this price by a non-negative factor (e.g., a tax rate).
    ///
    /// Returns `None` when the factor is negative.
    #[must_use]
    pub fn scale(&self, factor: Decimal) -> Option<Self> {
        if factor.is_sign_negative() && !factor.is_zero() {
            return None;
        }
        Some(Self(self.0 * factor))
    }

    /// Subtract another price, returning `None` if the result would be negative.
    #[must_use]
    pub fn checked_sub(&self, other: Self) -> Option<Self> {
        let diff = self.0 - other.0;
        if diff.is_sign_negative() && !diff.is_zero() {
            None
        } else {
            Some(Self(diff))
        }
    }

    /// Round to whole cents (two decimal places).
    #[must_use]
    pub fn round_cents(&self) -> Self {
        Self(self.0.round_dp(2))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
