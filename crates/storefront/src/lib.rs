//! F1 Street storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing the router to be tested in-process and served by `main`.
//!
//! # Architecture
//!
//! - Axum web framework, plain HTML forms (no client-side JavaScript)
//! - Askama templates for server-side rendering
//! - Static in-memory catalog from `f1_street_core`
//! - Per-shopper cart and search query in an in-memory tower-sessions store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::{Router, body::Body, http::Request, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Build the complete application: routes, static files, and middleware.
///
/// This is the composition root. The session layer and `AppState` are
/// attached here so every handler can extract them. The session lock wraps
/// the session layer so a session's load and save never interleave with
/// another request for the same session.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());
    let static_dir = ServeDir::new(&state.config().static_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", static_dir)
        .fallback(routes::not_found)
        .layer(session_layer)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::session_lock_middleware,
        ))
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{StatusCode, header};
    use tower::ServiceExt;

    use f1_street_core::Catalog;

    use super::*;
    use crate::config::StorefrontConfig;

    fn test_app() -> Router {
        app(AppState::new(
            StorefrontConfig::default(),
            Catalog::seeded().unwrap(),
        ))
    }

    async fn get(path: &str) -> axum::response::Response {
        test_app()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_responses_carry_security_headers() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(
            headers.get(header::CONTENT_SECURITY_POLICY).unwrap(),
            middleware::security_headers::CONTENT_SECURITY_POLICY_VALUE
        );
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
        assert!(headers.contains_key(middleware::request_id::REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_unmatched_path_is_not_found() {
        let response = get("/no/such/page").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cart_mutation_redirects_with_see_other() {
        let response = test_app()
            .oneshot(
                Request::post("/cart/add")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("product_id=1&return_to=%2Fproducts"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/products");
        assert!(response.headers().contains_key(header::SET_COOKIE));
    }

    #[tokio::test]
    async fn test_oversized_quantity_is_bad_request() {
        let response = test_app()
            .oneshot(
                Request::post("/cart/update")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("product_id=1&quantity=4294967296"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
