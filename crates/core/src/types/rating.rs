//! Customer rating type.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside the 0.0-5.0 star scale.
    #[error("rating must be between 0 and 5, got {0}")]
    OutOfRange(Decimal),
    /// The input string is not a decimal number.
    #[error("invalid rating: {0}")]
    Invalid(String),
}

/// An average customer rating on a 0.0-5.0 star scale.
///
/// ## Examples
///
/// ```
/// use velvet_cactus_core::Rating;
///
/// let rating = Rating::parse("4.8").unwrap();
/// assert_eq!(rating.to_string(), "4.8");
///
/// assert!(Rating::parse("5.1").is_err());
/// assert!(Rating::parse("-1").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    /// The lowest possible rating.
    pub const MIN: Self = Self(Decimal::ZERO);

    /// The highest possible rating.
    pub const MAX: Self = Self(Decimal::from_parts(5, 0, 0, false, 0));

    /// Create a new rating from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if the value is not within 0.0-5.0.
    pub fn new(value: Decimal) -> Result<Self, RatingError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Parse a `Rating` from a decimal string such as `"4.8"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal number or is out of range.
    pub fn parse(s: &str) -> Result<Self, RatingError> {
        let value: Decimal = s
            .trim()
            .parse()
            .map_err(|_| RatingError::Invalid(s.to_owned()))?;
        Self::new(value)
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Whether this rating is zero (treated as "no threshold" in filters).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = RatingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
