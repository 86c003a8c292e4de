//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use f1_street_core::Product;
use serde::Deserialize;
use tracing::instrument;

use super::layout::{LayoutView, category_url};
use crate::error::Result;
use crate::filters;
use crate::models::ShopperSession;
use crate::state::AppState;

/// Sizes offered on the detail page. Purely presentational.
pub const SIZES: &[&str] = &["XS", "S", "M", "L", "XL"];

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub url: String,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub image_url: String,
    pub category_label: &'static str,
    pub category_url: String,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            url: product_url(product.id.as_str()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image_url: product.image.clone(),
            category_label: product.category.label(),
            category_url: category_url(product.category),
        }
    }
}

/// Path of a product detail page.
#[must_use]
pub fn product_url(id: &str) -> String {
    format!("/product/{id}")
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub layout: LayoutView,
    pub products: Vec<ProductView>,
    pub query: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub layout: LayoutView,
    pub product: ProductView,
    pub sizes: &'static [&'static str],
}

/// Product not found template.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub layout: LayoutView,
    pub id: String,
}

/// Display the catalog, filtered by the shopper's search query.
///
/// `?q=` replaces the stored query (an empty value clears it); without `q`
/// the last query from this session is reused. The query is matched as
/// typed, whitespace included.
#[instrument(skip(state, shopper))]
pub async fn index(
    State(state): State<AppState>,
    shopper: ShopperSession,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse> {
    let query = match params.q {
        Some(q) => {
            shopper.set_search_query(&q).await?;
            q
        }
        None => shopper.search_query().await?,
    };

    let products: Vec<ProductView> = state
        .catalog()
        .search(&query)
        .into_iter()
        .map(ProductView::from)
        .collect();
    tracing::debug!(query = %query, results = products.len(), "Catalog search");

    Ok(ProductsIndexTemplate {
        layout: LayoutView::load(&state, &shopper).await?,
        products,
        query,
    })
}

/// Display product detail page.
///
/// Unknown IDs render a not-found page rather than an error.
#[instrument(skip(state, shopper))]
pub async fn show(
    State(state): State<AppState>,
    shopper: ShopperSession,
    Path(id): Path<String>,
) -> Result<Response> {
    let layout = LayoutView::load(&state, &shopper).await?;

    let Some(product) = state.catalog().find_by_id(&id) else {
        tracing::debug!(product_id = %id, "Product not found");
        return Ok((
            StatusCode::NOT_FOUND,
            ProductNotFoundTemplate { layout, id },
        )
            .into_response());
    };

    Ok(ProductShowTemplate {
        layout,
        product: ProductView::from(product),
        sizes: SIZES,
    }
    .into_response())
}
