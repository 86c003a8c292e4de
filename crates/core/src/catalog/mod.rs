//! The product catalog.
//!
//! The catalog is built once at startup and never changes. Listings, search
//! results, and category pages are all derived from it on demand; at tens of
//! products there is nothing worth indexing.

mod seed;

use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, PriceError, ProductId};

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Externally hosted image URL. Never fetched server-side.
    pub image: String,
    pub category: Category,
    pub description: Option<String>,
}

impl Product {
    /// Whether `needle` (already lowercased) occurs in the name or description.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(needle))
    }
}

/// The immutable, ordered product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products in display order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's built-in product list.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if a built-in product has a non-positive price.
    pub fn seeded() -> Result<Self, PriceError> {
        seed::products().map(Self::new)
    }

    /// All products, in source order.
    #[must_use]
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products whose name or description contains `query`, ignoring case.
    ///
    /// An empty query returns the whole catalog.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.matches(&needle))
            .collect()
    }

    /// Products in the category named by `label`, ignoring case.
    ///
    /// An unknown label yields an empty list.
    #[must_use]
    pub fn in_category(&self, label: &str) -> Vec<&Product> {
        Category::from_label(label).map_or_else(Vec::new, |category| {
            self.products
                .iter()
                .filter(|product| product.category == category)
                .collect()
        })
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
