//! Integration tests for F1 Street.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p f1-street-integration-tests
//! ```
//!
//! Each test spawns the storefront router in-process on an ephemeral port
//! and drives it over real HTTP with a cookie-carrying client, so session
//! behavior (cart, search query) is exercised end to end.
//!
//! # Test Categories
//!
//! - `storefront_pages` - Page rendering, status codes, response headers
//! - `storefront_cart` - Cart mutations and session persistence

use std::net::SocketAddr;

use f1_street_core::Catalog;
use f1_street_storefront::config::StorefrontConfig;
use f1_street_storefront::state::AppState;
use reqwest::Client;

/// A running storefront plus a client bound to one shopper session.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a storefront on `127.0.0.1:0` with the seeded catalog.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or the client cannot be built.
    pub async fn new() -> Self {
        let config = StorefrontConfig {
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static").to_string(),
            ..StorefrontConfig::default()
        };
        let catalog = Catalog::seeded().expect("Built-in catalog is invalid");
        let app = f1_street_storefront::app(AppState::new(config, catalog));

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            client: Self::client(),
            base_url: format!("http://{addr}"),
        }
    }

    /// A fresh client with its own cookie jar, i.e. a new shopper.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client() -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client")
    }

    /// Absolute URL for a storefront path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a path and return status and body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn get(&self, path: &str) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed");
        let status = resp.status();
        (status, resp.text().await.expect("Failed to read body"))
    }

    /// POST a form, following the redirect, and return final status and body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed");
        let status = resp.status();
        (status, resp.text().await.expect("Failed to read body"))
    }

    /// Add one unit of `product_id` to this session's cart.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the redirect target is not a success.
    pub async fn add_to_cart(&self, product_id: &str) {
        let (status, _) = self
            .post_form("/cart/add", &[("product_id", product_id)])
            .await;
        assert!(status.is_success(), "add to cart failed: {status}");
    }

    /// The cart badge count as reported by `/cart/count`.
    ///
    /// # Panics
    ///
    /// Panics if the body is not a number.
    pub async fn cart_count(&self) -> u32 {
        let (_, body) = self.get("/cart/count").await;
        body.trim().parse().expect("cart count is not a number")
    }
}
