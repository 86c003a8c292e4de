//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: <http://localhost:3000>)
//! - `STOREFRONT_NAME` - Store name shown in the header (default: F1 STREET)
//! - `STOREFRONT_STATIC_DIR` - Stylesheet directory (default: crates/storefront/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Store name rendered in the page header and titles
    pub store_name: String,
    /// Directory served under `/static`
    pub static_dir: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            store_name: "F1 STREET".to_string(),
            static_dir: "crates/storefront/static".to_string(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_or(&lookup, "STOREFRONT_HOST", defaults.host)?;
        let port = parse_or(&lookup, "STOREFRONT_PORT", defaults.port)?;
        let base_url = lookup("STOREFRONT_BASE_URL").unwrap_or(defaults.base_url);
        let store_name = lookup("STOREFRONT_NAME").unwrap_or(defaults.store_name);
        let static_dir = lookup("STOREFRONT_STATIC_DIR").unwrap_or(defaults.static_dir);

        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty());
        let sentry_environment = lookup("SENTRY_ENVIRONMENT");
        let sentry_sample_rate =
            parse_rate(&lookup, "SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?;
        let sentry_traces_sample_rate = parse_rate(
            &lookup,
            "SENTRY_TRACES_SAMPLE_RATE",
            defaults.sentry_traces_sample_rate,
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            store_name,
            static_dir,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS (enables secure cookies).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse a sample rate, which must lie in `0.0..=1.0`.
fn parse_rate(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: f32,
) -> Result<f32, ConfigError> {
    let rate = parse_or(lookup, key, default)?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.store_name, "F1 STREET");
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_secure());
    }

    #[test]
    fn test_socket_addr() {
        let config = load(&[("STOREFRONT_HOST", "0.0.0.0"), ("STOREFRONT_PORT", "8080")]).unwrap();

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("STOREFRONT_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_PORT"));
    }

    #[test]
    fn test_invalid_host() {
        assert!(load(&[("STOREFRONT_HOST", "not-an-ip")]).is_err());
    }

    #[test]
    fn test_sample_rate_bounds() {
        let config = load(&[("SENTRY_TRACES_SAMPLE_RATE", "0.25")]).unwrap();
        assert!((config.sentry_traces_sample_rate - 0.25).abs() < f32::EPSILON);

        assert!(load(&[("SENTRY_SAMPLE_RATE", "1.5")]).is_err());
        assert!(load(&[("SENTRY_SAMPLE_RATE", "-0.1")]).is_err());
    }

    #[test]
    fn test_empty_dsn_is_disabled() {
        let config = load(&[("SENTRY_DSN", "")]).unwrap();
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_https_base_url_is_secure() {
        let config = load(&[("STOREFRONT_BASE_URL", "https://f1street.example")]).unwrap();
        assert!(config.is_secure());
    }
}
