//! Application state shared across handlers.

use std::sync::Arc;

use f1_street_core::Catalog;

use crate::config::StorefrontConfig;
use crate::middleware::SessionLocks;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration, the read-only product catalog, and the per-session
/// request locks. Per-shopper state (cart, search query) lives in the
/// session, not here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    session_locks: SessionLocks,
}

impl AppState {
    /// Create application state serving `catalog`.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                session_locks: SessionLocks::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Locks that run requests for one session one at a time.
    #[must_use]
    pub fn session_locks(&self) -> &SessionLocks {
        &self.inner.session_locks
    }
}
