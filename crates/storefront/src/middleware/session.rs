//! Session middleware configuration.
//!
//! Sessions live in process memory in a `MokaStore`, which drops records once
//! they expire or when the store is full. A shopper's cart lasts as long as
//! their session and the server process.

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "f1_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Most sessions held in memory at once.
const MAX_SESSIONS: u64 = 100_000;

/// Create the session layer backed by an in-memory store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaStore> {
    SessionManagerLayer::new(MokaStore::new(Some(MAX_SESSIONS)))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
