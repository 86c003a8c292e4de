//! Cart route handlers.
//!
//! The cart lives in the shopper's session. Mutations are plain form posts
//! that update the session and redirect (post/redirect/get), so the cart
//! page and header badge always render from the stored state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use f1_street_core::{Cart, CartLine};
use serde::Deserialize;
use tracing::instrument;

use super::layout::LayoutView;
use super::products::product_url;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::ShopperSession;
use crate::state::AppState;

/// Where cart mutations land when no valid `return_to` is given.
pub const CART_PATH: &str = "/cart";

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: String,
    pub url: String,
    pub name: String,
    pub image_url: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    /// Quantity posted by the "-" button; reaching zero removes the line.
    pub decrement_to: i64,
    /// Quantity posted by the "+" button.
    pub increment_to: i64,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.subtotal().to_string(),
            item_count: cart.item_count(),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        let quantity = i64::from(line.quantity);
        Self {
            product_id: line.product.id.to_string(),
            url: product_url(line.product.id.as_str()),
            name: line.product.name.clone(),
            image_url: line.product.image.clone(),
            quantity: line.quantity,
            price: line.product.price.to_string(),
            line_price: line.line_total().to_string(),
            decrement_to: (quantity - 1).max(0),
            increment_to: quantity + 1,
        }
    }
}

/// Accept only local absolute paths as redirect targets.
///
/// Rejects anything that could leave the site (`//host`, `/\host`, full URLs)
/// and anything that is not a valid `Location` header value.
#[must_use]
pub fn safe_return_path(candidate: Option<&str>) -> &str {
    match candidate {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && path.chars().all(|c| c.is_ascii_graphic()) =>
        {
            path
        }
        _ => CART_PATH,
    }
}

/// Reject quantities a cart line cannot hold.
///
/// Zero and negative values pass through; they remove the line.
fn checked_quantity(quantity: i64) -> Result<i64> {
    if quantity > i64::from(u32::MAX) {
        return Err(AppError::BadRequest(format!(
            "quantity {quantity} exceeds {}",
            u32::MAX
        )));
    }
    Ok(quantity)
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    /// Page to return to after adding; defaults to the cart.
    pub return_to: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: LayoutView,
    pub cart: CartView,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state, shopper))]
pub async fn show(
    State(state): State<AppState>,
    shopper: ShopperSession,
) -> Result<impl IntoResponse> {
    let cart = shopper.cart().await?;

    Ok(CartShowTemplate {
        layout: LayoutView::new(&state, cart.item_count()),
        cart: CartView::from(&cart),
    })
}

/// Add one unit of a product to the cart.
///
/// Unknown product IDs leave the cart untouched.
#[instrument(skip(state, shopper))]
pub async fn add(
    State(state): State<AppState>,
    shopper: ShopperSession,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let destination = safe_return_path(form.return_to.as_deref()).to_string();

    let Some(product) = state.catalog().find_by_id(&form.product_id) else {
        tracing::warn!(product_id = %form.product_id, "Add to cart for unknown product");
        return Ok(Redirect::to(&destination));
    };

    let cart = shopper.update_cart(|cart| cart.add(product)).await?;
    add_breadcrumb(
        "cart",
        "Added product",
        Some(&[("product_id", product.id.as_str())]),
    );
    tracing::info!(
        product_id = %product.id,
        item_count = cart.item_count(),
        "Added to cart"
    );

    Ok(Redirect::to(&destination))
}

/// Set a line's quantity; zero or less removes it.
///
/// Quantities above `u32::MAX` are rejected with 400.
#[instrument(skip(shopper))]
pub async fn update(
    shopper: ShopperSession,
    Form(form): Form<UpdateCartForm>,
) -> Result<Redirect> {
    let quantity = checked_quantity(form.quantity)?;
    let cart = shopper
        .update_cart(|cart| cart.update_quantity(&form.product_id, quantity))
        .await?;
    tracing::info!(
        product_id = %form.product_id,
        quantity,
        item_count = cart.item_count(),
        "Updated cart quantity"
    );

    Ok(Redirect::to(CART_PATH))
}

/// Remove a line from the cart.
#[instrument(skip(shopper))]
pub async fn remove(
    shopper: ShopperSession,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect> {
    let cart = shopper
        .update_cart(|cart| cart.remove(&form.product_id))
        .await?;
    tracing::info!(
        product_id = %form.product_id,
        item_count = cart.item_count(),
        "Removed from cart"
    );

    Ok(Redirect::to(CART_PATH))
}

/// Cart item count as plain text, for badge polling.
#[instrument(skip(shopper))]
pub async fn count(shopper: ShopperSession) -> Result<String> {
    Ok(shopper.cart_count().await?.to_string())
}

/// Checkout placeholder.
///
/// No order service is wired up. The cart is left as-is and the shopper is
/// sent back to the cart page.
#[instrument(skip(shopper))]
pub async fn checkout(shopper: ShopperSession) -> Result<Redirect> {
    let cart = shopper.cart().await?;
    if cart.is_empty() {
        return Ok(Redirect::to(CART_PATH));
    }

    add_breadcrumb("checkout", "Checkout requested", None);
    tracing::info!(
        lines = cart.lines().len(),
        item_count = cart.item_count(),
        subtotal = %cart.subtotal(),
        "Checkout requested; no order service configured"
    );

    Ok(Redirect::to(CART_PATH))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use f1_street_core::Catalog;

    use super::*;

    #[test]
    fn test_cart_view_from_cart() {
        let catalog = Catalog::seeded().unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.find_by_id("1").unwrap());
        cart.add(catalog.find_by_id("1").unwrap());
        cart.add(catalog.find_by_id("7").unwrap());

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "$210.00");
        assert_eq!(view.items.len(), 2);

        let tee = view.items.first().unwrap();
        assert_eq!(tee.product_id, "1");
        assert_eq!(tee.quantity, 2);
        assert_eq!(tee.price, "$45.00");
        assert_eq!(tee.line_price, "$90.00");
        assert_eq!(tee.decrement_to, 1);
        assert_eq!(tee.increment_to, 3);
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn test_checked_quantity() {
        assert_eq!(checked_quantity(3).unwrap(), 3);
        assert_eq!(checked_quantity(-5).unwrap(), -5);
        assert_eq!(
            checked_quantity(i64::from(u32::MAX)).unwrap(),
            i64::from(u32::MAX)
        );

        let err = checked_quantity(i64::from(u32::MAX) + 1).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(Some("/products")), "/products");
        assert_eq!(safe_return_path(Some("/category/tees")), "/category/tees");
        assert_eq!(safe_return_path(None), CART_PATH);
        assert_eq!(safe_return_path(Some("")), CART_PATH);
        assert_eq!(safe_return_path(Some("//evil.example")), CART_PATH);
        assert_eq!(safe_return_path(Some("/\\evil.example")), CART_PATH);
        assert_eq!(safe_return_path(Some("https://evil.example")), CART_PATH);
        assert_eq!(safe_return_path(Some("/category/race day")), CART_PATH);
    }
}
