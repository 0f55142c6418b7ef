//! Velvet Cactus Storefront library.
//!
//! The client-side core of the storefront: a per-session state store for the
//! cart, wishlist, and signed-in user, plus a pure listing engine that
//! derives the product list a page should render.
//!
//! # Architecture
//!
//! - [`catalog`] - Immutable product catalog, loaded once per process
//! - [`session`] - Per-session state, mutated only through dispatched actions
//! - [`listing`] - Pure filter/sort derivation over the catalog
//! - [`checkout`] - Order totals and simulated order placement
//! - [`config`] - Environment-based configuration
//!
//! All state is in-memory and session-local. Nothing here performs network
//! or database I/O; the only filesystem access is the optional catalog file
//! in [`catalog::Catalog::load`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod listing;
pub mod models;
pub mod session;
