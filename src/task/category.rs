//! Closed set of task categories.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category a task is grouped under.
///
/// Variants are declared in display priority order; `Ord` follows that order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    #[default]
    #[serde(rename = "Gelişim")]
    Gelisim,
    #[serde(rename = "Hazırlık")]
    Hazirlik,
    #[serde(rename = "Araştırma")]
    Arastirma,
    #[serde(rename = "Proje")]
    Proje,
    #[serde(rename = "Diğer")]
    Diger,
}

impl Category {
    /// Every category, in display priority order.
    pub const ALL: [Category; 5] = [
        Category::Gelisim,
        Category::Hazirlik,
        Category::Arastirma,
        Category::Proje,
        Category::Diger,
    ];

    /// Label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Gelisim => "Gelişim",
            Category::Hazirlik => "Hazırlık",
            Category::Arastirma => "Araştırma",
            Category::Proje => "Proje",
            Category::Diger => "Diğer",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == label)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_priority_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert_eq!(Category::ALL[0], Category::default());
    }

    #[test]
    fn test_labels_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
        assert_eq!(" Araştırma ".parse::<Category>(), Ok(Category::Arastirma));
        assert!("Arastirma".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::Hazirlik).unwrap();
        assert_eq!(json, "\"Hazırlık\"");
        let parsed: Category = serde_json::from_str("\"Diğer\"").unwrap();
        assert_eq!(parsed, Category::Diger);
    }
}
