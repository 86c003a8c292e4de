//! Authentication route handlers.
//!
//! There is no credential backend: the login form renders and accepts a
//! submission, but nothing is verified and no session identity is issued.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use super::layout::LayoutView;
use crate::error::Result;
use crate::filters;
use crate::models::ShopperSession;
use crate::state::AppState;

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";

/// Login form data.
///
/// Implements `Debug` manually to redact the password.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Present (any value) when "Remember me" is ticked.
    pub remember: Option<String>,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("remember", &self.remember.is_some())
            .finish()
    }
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub layout: LayoutView,
}

/// Display the login page.
#[instrument(skip(state, shopper))]
pub async fn login_page(
    State(state): State<AppState>,
    shopper: ShopperSession,
) -> Result<impl IntoResponse> {
    Ok(LoginTemplate {
        layout: LayoutView::load(&state, &shopper).await?,
    })
}

/// Accept a login submission.
///
/// Submission is a no-op: the attempt is logged (without the password) and
/// the shopper is sent back to the login page.
#[instrument]
pub async fn login(Form(form): Form<LoginForm>) -> Redirect {
    tracing::info!(
        email = %form.email,
        remember = form.remember.is_some(),
        "Sign-in submitted; no credential backend configured"
    );
    Redirect::to(LOGIN_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_debug_redacts_password() {
        let form = LoginForm {
            email: "driver@example.com".to_string(),
            password: "hunter2-super-secret".to_string(),
            remember: Some("on".to_string()),
        };

        let debug_output = format!("{form:?}");

        assert!(debug_output.contains("driver@example.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("hunter2-super-secret"));
    }
}
