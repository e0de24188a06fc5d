//! Product categories.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a category label is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// The fixed set of catalog categories.
///
/// Serialized using the display label (e.g. `"Beauty & Wellness"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Saffron Threads")]
    SaffronThreads,
    #[serde(rename = "Saffron Powder")]
    SaffronPowder,
    #[serde(rename = "Saffron Tea")]
    SaffronTea,
    #[serde(rename = "Beauty & Wellness")]
    BeautyAndWellness,
    #[serde(rename = "Gift Sets")]
    GiftSets,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Self; 5] = [
        Self::SaffronThreads,
        Self::SaffronPowder,
        Self::SaffronTea,
        Self::BeautyAndWellness,
        Self::GiftSets,
    ];

    /// Human-readable label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SaffronThreads => "Saffron Threads",
            Self::SaffronPowder => "Saffron Powder",
            Self::SaffronTea => "Saffron Tea",
            Self::BeautyAndWellness => "Beauty & Wellness",
            Self::GiftSets => "Gift Sets",
        }
    }

    /// URL/CLI friendly slug (e.g. `beauty-wellness`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::SaffronThreads => "saffron-threads",
            Self::SaffronPowder => "saffron-powder",
            Self::SaffronTea => "saffron-tea",
            Self::BeautyAndWellness => "beauty-wellness",
            Self::GiftSets => "gift-sets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Accepts either the label or the slug, case-insensitively.
impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_slug() {
        assert_eq!("Gift Sets".parse::<Category>().unwrap(), Category::GiftSets);
        assert_eq!(
            "beauty-wellness".parse::<Category>().unwrap(),
            Category::BeautyAndWellness
        );
        assert_eq!(
            "saffron tea".parse::<Category>().unwrap(),
            Category::SaffronTea
        );
        assert!("Spices".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Category::BeautyAndWellness).unwrap();
        assert_eq!(json, "\"Beauty & Wellness\"");

        let parsed: Category = serde_json::from_str("\"Saffron Threads\"").unwrap();
        assert_eq!(parsed, Category::SaffronThreads);
    }

    #[test]
    fn test_display_matches_label() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.label());
        }
    }
}
