//! Core types for Velvet Cactus.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod rating;

pub use id::*;
pub use price::{Price, PriceError};
pub use rating::{Rating, RatingError};
