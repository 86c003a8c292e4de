//! Session-related types.
//!
//! A shopper's cart and search query are stored in their session. Handlers
//! receive a [`ShopperSession`] and go through it for every read and write,
//! so there is one owner of per-shopper state per request.

use axum::{extract::FromRequestParts, http::request::Parts};
use f1_street_core::Cart;
use tower_sessions::Session;

use crate::error::Result;

/// Session keys for shopper data.
pub mod keys {
    /// Key for the serialized cart.
    pub const CART: &str = "cart";

    /// Key for the last catalog search string.
    pub const SEARCH_QUERY: &str = "search_query";
}

/// Per-shopper state holder backed by the request's session.
#[derive(Clone)]
pub struct ShopperSession(Session);

impl ShopperSession {
    /// Wrap an existing session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// The shopper's cart, empty if they have never added anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn cart(&self) -> Result<Cart> {
        Ok(self.0.get::<Cart>(keys::CART).await?.unwrap_or_default())
    }

    /// Replace the stored cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn save_cart(&self, cart: &Cart) -> Result<()> {
        self.0.insert(keys::CART, cart).await?;
        Ok(())
    }

    /// Load the cart, apply `mutation`, store it, and return the new cart.
    ///
    /// The load and store are atomic per session only because
    /// [`session_lock_middleware`](crate::middleware::session_lock_middleware)
    /// runs a session's requests one at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read or written.
    pub async fn update_cart(&self, mutation: impl FnOnce(&mut Cart)) -> Result<Cart> {
        let mut cart = self.cart().await?;
        mutation(&mut cart);
        self.save_cart(&cart).await?;
        Ok(cart)
    }

    /// Units in the cart, for the header badge.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn cart_count(&self) -> Result<u32> {
        Ok(self.cart().await?.item_count())
    }

    /// The last search string, empty if none.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn search_query(&self) -> Result<String> {
        Ok(self
            .0
            .get::<String>(keys::SEARCH_QUERY)
            .await?
            .unwrap_or_default())
    }

    /// Remember the search string for later catalog visits.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn set_search_query(&self, query: &str) -> Result<()> {
        self.0.insert(keys::SEARCH_QUERY, query).await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for ShopperSession
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        Session::from_request_parts(parts, state).await.map(Self)
    }
}
