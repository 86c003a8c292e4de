//! Core types for F1 Street.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;

pub use category::Category;
pub use id::ProductId;
pub use price::{Price, PriceError};
