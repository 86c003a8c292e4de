//! Product categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tees,
    Jackets,
    Caps,
    Accessories,
    Limited,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Tees,
        Self::Jackets,
        Self::Caps,
        Self::Accessories,
        Self::Limited,
    ];

    /// Fallback blurb for category pages that match nothing.
    pub const DEFAULT_DESCRIPTION: &'static str = "Racing gear for the modern enthusiast";

    /// Display label (`"Tees"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tees => "Tees",
            Self::Jackets => "Jackets",
            Self::Caps => "Caps",
            Self::Accessories => "Accessories",
            Self::Limited => "Limited",
        }
    }

    /// URL path segment (`"tees"`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Tees => "tees",
            Self::Jackets => "jackets",
            Self::Caps => "caps",
            Self::Accessories => "accessories",
            Self::Limited => "limited",
        }
    }

    /// Marketing copy shown under the category heading.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Tees => "Premium F1-inspired t-shirts for racing enthusiasts",
            Self::Jackets => "High-performance racing jackets and outerwear",
            Self::Caps => "Racing caps and headwear for the modern driver",
            Self::Accessories => {
                "Essential racing accessories including chains, bracelets and watches"
            }
            Self::Limited => "Exclusive limited edition racing collectibles",
        }
    }

    /// Case-insensitive lookup by label.
    ///
    /// The label is compared as given; surrounding whitespace does not match.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_ignores_case() {
        assert_eq!(Category::from_label("tees"), Some(Category::Tees));
        assert_eq!(Category::from_label("TEES"), Some(Category::Tees));
        assert_eq!(Category::from_label("Accessories"), Some(Category::Accessories));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Category::from_label("nonexistent"), None);
        assert_eq!(Category::from_label(" tees"), None);
    }

    #[test]
    fn test_slug_round_trips_through_label_lookup() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.slug()), Some(category));
        }
    }
}
