// 🏷️ Category - the closed set of catalog sections
//
// Every entity belongs to exactly one of six categories. The order of
// `Category::ALL` is the tab order shown in the UI and the order used by
// every listing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Companies,
    Countries,
    NonProfits,
    Media,
    Educational,
    Government,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Companies,
        Category::Countries,
        Category::NonProfits,
        Category::Media,
        Category::Educational,
        Category::Government,
    ];

    /// Human-readable label (tab title)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Companies => "Companies",
            Category::Countries => "Countries",
            Category::NonProfits => "Non-Profits",
            Category::Media => "Media",
            Category::Educational => "Educational",
            Category::Government => "Government",
        }
    }

    /// Stable identifier used on the command line, in the API and in CSV files
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Companies => "companies",
            Category::Countries => "countries",
            Category::NonProfits => "non-profits",
            Category::Media => "media",
            Category::Educational => "educational",
            Category::Government => "government",
        }
    }

    fn position(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(0)
    }

    /// Next tab (wraps around)
    pub fn next(&self) -> Self {
        Category::ALL[(self.position() + 1) % Category::ALL.len()]
    }

    /// Previous tab (wraps around)
    pub fn previous(&self) -> Self {
        let len = Category::ALL.len();
        Category::ALL[(self.position() + len - 1) % len]
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Companies
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Accepts either the slug or the label, case-insensitively.
    /// "nonprofits" and "non_profits" are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");

        Category::ALL
            .iter()
            .copied()
            .find(|c| {
                c.slug() == normalized
                    || c.label().to_lowercase() == normalized
                    || c.slug().replace('-', "") == normalized
            })
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Companies", "Countries", "Non-Profits", "Media", "Educational", "Government"]
        );
    }

    #[test]
    fn test_parse_slug_and_label() {
        assert_eq!("companies".parse::<Category>().unwrap(), Category::Companies);
        assert_eq!("Non-Profits".parse::<Category>().unwrap(), Category::NonProfits);
        assert_eq!("nonprofits".parse::<Category>().unwrap(), Category::NonProfits);
        assert_eq!("non_profits".parse::<Category>().unwrap(), Category::NonProfits);
        assert_eq!("  GOVERNMENT ".parse::<Category>().unwrap(), Category::Government);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sports".parse::<Category>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref s) if s == "sports"));
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Category::Companies.next(), Category::Countries);
        assert_eq!(Category::Government.next(), Category::Companies);
        assert_eq!(Category::Companies.previous(), Category::Government);

        let mut c = Category::Media;
        for _ in 0..Category::ALL.len() {
            c = c.next();
        }
        assert_eq!(c, Category::Media);
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Category::NonProfits).unwrap();
        assert_eq!(json, "\"non-profits\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::NonProfits);
    }
}
