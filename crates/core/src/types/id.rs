//! Product identifier newtype.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product identifier.
///
/// Catalog identifiers are opaque strings (`"1"`, `"27"`), so this wraps a
/// `String` rather than a number. Two products never share an ID.
///
/// ```
/// use f1_street_core::ProductId;
///
/// let id = ProductId::new("7");
/// assert_eq!(id.as_str(), "7");
/// assert_eq!(id, "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inner() {
        assert_eq!(ProductId::new("12").to_string(), "12");
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&ProductId::new("3")).unwrap();
        assert_eq!(json, "\"3\"");

        let parsed: ProductId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(parsed, "3");
    }
}
