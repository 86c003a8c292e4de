//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /products               - Product listing with search (?q=)
//! GET  /product/{id}           - Product detail (renders "not found" for unknown IDs)
//! GET  /category/{category}    - Category listing (empty state for unknown categories)
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add one unit (redirects to return_to or /cart)
//! POST /cart/update            - Set quantity, <= 0 removes (redirects to /cart)
//! POST /cart/remove            - Remove line (redirects to /cart)
//! GET  /cart/count             - Cart item count (plain text)
//!
//! # Checkout
//! POST /checkout               - Placeholder, redirects to /cart
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login submission (no-op)
//! ```

pub mod auth;
pub mod cart;
pub mod categories;
pub mod home;
pub mod layout;
pub mod products;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::ShopperSession;
use crate::state::AppState;
use layout::LayoutView;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog
        .route("/products", get(products::index))
        .route("/product/{id}", get(products::show))
        .route("/category/{category}", get(categories::show))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout placeholder
        .route("/checkout", post(cart::checkout))
        // Auth
        .route(auth::LOGIN_PATH, get(auth::login_page).post(auth::login))
}

/// Page not found template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: LayoutView,
}

/// Fallback for paths that match no route.
#[instrument(skip(state, shopper))]
pub async fn not_found(
    State(state): State<AppState>,
    shopper: ShopperSession,
) -> Result<Response> {
    Ok((
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            layout: LayoutView::load(&state, &shopper).await?,
        },
    )
        .into_response())
}
