//! Per-session request serialization.
//!
//! A session record is loaded when a handler first reads it and written back
//! by the session layer after the handler returns. Two requests carrying the
//! same session cookie would interleave those steps, and the later write
//! would discard the earlier one's cart change. This middleware sits outside
//! the session layer and runs requests for one session ID one at a time.
//! Requests without a session cookie each get a fresh session and are not
//! serialized.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::Response,
};
use moka::future::Cache;
use tokio::sync::Mutex;
use tower_sessions::{cookie::Cookie, session::Id};

use super::session::SESSION_COOKIE_NAME;
use crate::state::AppState;

/// Most session locks kept at once.
const MAX_TRACKED_SESSIONS: u64 = 100_000;

/// Locks unused for this long are dropped.
const LOCK_IDLE_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// One mutex per active session ID.
#[derive(Clone)]
pub struct SessionLocks {
    locks: Cache<Id, Arc<Mutex<()>>>,
}

impl SessionLocks {
    #[must_use]
    pub fn new() -> Self {
        let locks = Cache::builder()
            .max_capacity(MAX_TRACKED_SESSIONS)
            .time_to_idle(LOCK_IDLE_TIMEOUT)
            .build();
        Self { locks }
    }

    /// The mutex guarding session `id`, created on first use.
    pub async fn lock_for(&self, id: Id) -> Arc<Mutex<()>> {
        self.locks
            .get_with(id, async { Arc::new(Mutex::new(())) })
            .await
    }
}

impl Default for SessionLocks {
    fn default() -> Self {
        Self::new()
    }
}

/// The session ID named by the request's session cookie, if well-formed.
fn session_id(headers: &HeaderMap) -> Option<Id> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .and_then(|cookie| cookie.value().parse().ok())
}

/// Hold the session's lock for the whole request, including the session save.
pub async fn session_lock_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(id) = session_id(request.headers()) else {
        return next.run(request).await;
    };

    let lock = state.session_locks().lock_for(id).await;
    let _guard = lock.lock().await;
    next.run(request).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_session_id_from_cookie_header() {
        let id = Id::default();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE_NAME}={id}")).unwrap(),
        );

        assert_eq!(session_id(&headers), Some(id));
    }

    #[test]
    fn test_session_id_missing_or_malformed() {
        assert_eq!(session_id(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("{SESSION_COOKIE_NAME}=not-an-id!")).unwrap(),
        );
        assert_eq!(session_id(&headers), None);
    }

    #[tokio::test]
    async fn test_same_session_shares_one_lock() {
        let locks = SessionLocks::new();
        let id = Id::default();

        let first = locks.lock_for(id).await;
        let second = locks.lock_for(id).await;
        let other = locks.lock_for(Id::default()).await;

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));

        let _held = first.lock().await;
        assert!(second.try_lock().is_err());
        assert!(other.try_lock().is_ok());
    }
}
