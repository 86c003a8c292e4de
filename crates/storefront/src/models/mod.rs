//! Domain models for storefront.
//!
//! Catalog and cart types come from `f1_street_core`; this module holds the
//! storefront-side wrappers that store them in the session.

pub mod session;

pub use session::{ShopperSession, keys as session_keys};
