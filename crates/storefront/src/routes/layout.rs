//! Data shared by every page: header navigation and the cart badge.

use f1_street_core::Category;

use crate::error::Result;
use crate::models::ShopperSession;
use crate::state::AppState;

/// A navigation link to a category page.
#[derive(Clone)]
pub struct CategoryLink {
    pub label: &'static str,
    pub url: String,
}

impl From<Category> for CategoryLink {
    fn from(category: Category) -> Self {
        Self {
            label: category.label(),
            url: category_url(category),
        }
    }
}

/// Header and footer data rendered by `base.html`.
#[derive(Clone)]
pub struct LayoutView {
    pub store_name: String,
    pub cart_count: u32,
    pub categories: Vec<CategoryLink>,
}

impl LayoutView {
    /// Build the layout for a shopper whose cart holds `cart_count` units.
    #[must_use]
    pub fn new(state: &AppState, cart_count: u32) -> Self {
        Self {
            store_name: state.config().store_name.clone(),
            cart_count,
            categories: Category::ALL.into_iter().map(CategoryLink::from).collect(),
        }
    }

    /// Build the layout, reading the cart badge from the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(state: &AppState, shopper: &ShopperSession) -> Result<Self> {
        Ok(Self::new(state, shopper.cart_count().await?))
    }
}

/// Path of a category listing page.
#[must_use]
pub fn category_url(category: Category) -> String {
    format!("/category/{}", category.slug())
}
