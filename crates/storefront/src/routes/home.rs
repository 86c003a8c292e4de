//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::layout::LayoutView;
use crate::error::Result;
use crate::filters;
use crate::models::ShopperSession;
use crate::state::AppState;

/// Static hero banner content.
#[derive(Clone)]
pub struct HeroView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_text: &'static str,
    pub button_url: &'static str,
}

impl Default for HeroView {
    fn default() -> Self {
        Self {
            title: "RACE THE STREETS",
            subtitle: "Formula 1 inspired streetwear for the modern racer",
            button_text: "VIEW ALL PRODUCTS",
            button_url: "/products",
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: LayoutView,
    pub hero: HeroView,
}

/// Display the home page: hero banner and the "shop by category" grid.
///
/// The category grid reuses `layout.categories`.
#[instrument(skip(state, shopper))]
pub async fn home(
    State(state): State<AppState>,
    shopper: ShopperSession,
) -> Result<impl IntoResponse> {
    Ok(HomeTemplate {
        layout: LayoutView::load(&state, &shopper).await?,
        hero: HeroView::default(),
    })
}
