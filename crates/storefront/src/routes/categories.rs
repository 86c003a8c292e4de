//! Category route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use f1_street_core::Category;
use tracing::instrument;

use super::layout::LayoutView;
use super::products::ProductView;
use crate::error::Result;
use crate::filters;
use crate::models::ShopperSession;
use crate::state::AppState;

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub layout: LayoutView,
    /// Requested name with its first letter capitalized.
    pub name: String,
    pub description: &'static str,
    pub products: Vec<ProductView>,
    /// Where the "Add to Cart" buttons send the shopper back to.
    pub return_to: String,
}

/// Capitalize the first character of a URL segment (`"tees"` -> `"Tees"`).
fn display_name(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Display the products in one category.
///
/// An unknown category renders the empty state, not an error.
#[instrument(skip(state, shopper))]
pub async fn show(
    State(state): State<AppState>,
    shopper: ShopperSession,
    Path(category): Path<String>,
) -> Result<impl IntoResponse> {
    let products: Vec<ProductView> = state
        .catalog()
        .in_category(&category)
        .into_iter()
        .map(ProductView::from)
        .collect();

    let description = Category::from_label(&category)
        .map_or(Category::DEFAULT_DESCRIPTION, Category::description);

    Ok(CategoryShowTemplate {
        layout: LayoutView::load(&state, &shopper).await?,
        name: display_name(&category),
        description,
        products,
        return_to: format!("/category/{category}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("tees"), "Tees");
        assert_eq!(display_name("ACCESSORIES"), "ACCESSORIES");
        assert_eq!(display_name("hoodies"), "Hoodies");
        assert_eq!(display_name(""), "");
    }
}
