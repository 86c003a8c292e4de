//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded into the span)
//! 4. Security headers (CSP, frame options, etc.)
//! 5. Session lock (one request at a time per session)
//! 6. Session layer (tower-sessions with an in-memory `MokaStore`)

pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod session_lock;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
pub use session_lock::{SessionLocks, session_lock_middleware};
