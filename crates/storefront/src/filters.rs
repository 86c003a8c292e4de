//! Custom Askama template filters.

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(
    _value: impl std::fmt::Display,
    _env: &dyn askama::Values,
) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Upper-cases the first character, leaving the rest untouched.
///
/// Usage in templates: `{{ category.label|initial }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn initial(value: impl std::fmt::Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(value
        .to_string()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default())
}
