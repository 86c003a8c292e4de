//! F1 Street Core - Catalog and cart domain library.
//!
//! This crate provides the domain types used by the storefront:
//! - [`types`] - Newtype wrappers for product IDs, prices, and categories
//! - [`catalog`] - The immutable product catalog, search, and category listings
//! - [`cart`] - The per-session shopping cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no session handling. The storefront binary owns all of that.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Product};
pub use types::*;
