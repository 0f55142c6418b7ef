//! Velvet Cactus Core - Shared types library.
//!
//! This crate provides common types used across all Velvet Cactus components:
//! - `storefront` - Session store, catalog, and listing engine
//! - `cli` - Command-line storefront browser and demo driver
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no catalog data, no state.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
