// 🪪 Entity - one rated catalog record
//
// "Identity is the UUID, everything else is the value."
//
// The id is assigned when the entity is built and lives as long as the
// catalog that owns it. Fixture rows and CSV rows carry no id; a fresh one
// is generated every run.

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::CatalogError;

/// Highest valid score
pub const MAX_PERCENTAGE: u8 = 100;

// ============================================================================
// ENTITY
// ============================================================================

/// Only built through `Entity::from_record`, which checks the invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// Stable identity (UUID v4) - unique within one catalog
    pub id: String,

    /// Display name, never empty
    pub name: String,

    pub category: Category,

    /// Polarity: true = WOKE, false = NOT WOKE
    pub is_woke: bool,

    /// Alignment strength, 0..=100
    pub woke_percentage: u8,

    /// Remote logo image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_ref: Option<String>,

    /// Remote evidence document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_ref: Option<String>,
}

impl Entity {
    /// Build an entity from a record, checking the record invariants
    pub fn from_record(record: EntityRecord) -> Result<Self, CatalogError> {
        let name = record.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }

        if record.woke_percentage > MAX_PERCENTAGE {
            return Err(CatalogError::PercentageOutOfRange {
                name,
                value: record.woke_percentage,
            });
        }

        Ok(Entity {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            category: record.category,
            is_woke: record.is_woke,
            woke_percentage: record.woke_percentage,
            logo_ref: non_empty(record.logo_url),
            evidence_ref: non_empty(record.evidence_url),
        })
    }

    /// Percentage shown to the user.
    ///
    /// NOT WOKE entities show the complement (`100 - woke_percentage`),
    /// so Goya with a stored 25 reads "75%".
    pub fn displayed_percentage(&self) -> u8 {
        if self.is_woke {
            self.woke_percentage
        } else {
            MAX_PERCENTAGE.saturating_sub(self.woke_percentage)
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_woke {
            "WOKE"
        } else {
            "NOT WOKE"
        }
    }

    /// Case-insensitive substring match on the name. Empty term matches.
    pub fn name_contains(&self, term: &str) -> bool {
        term.is_empty() || self.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// Case-insensitive whole-name match
    pub fn name_equals(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Convert back to an id-less record (for CSV export / fingerprinting)
    pub fn to_record(&self) -> EntityRecord {
        EntityRecord {
            name: self.name.clone(),
            category: self.category,
            is_woke: self.is_woke,
            woke_percentage: self.woke_percentage,
            logo_url: self.logo_ref.clone(),
            evidence_url: self.evidence_ref.clone(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// ENTITY RECORD (CSV row / fixture row)
// ============================================================================

/// Id-less row as it appears in a fixture file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Category")]
    pub category: Category,

    #[serde(rename = "Is_Woke")]
    pub is_woke: bool,

    #[serde(rename = "Woke_Percentage")]
    pub woke_percentage: u8,

    #[serde(rename = "Logo_Url")]
    pub logo_url: Option<String>,

    #[serde(rename = "Evidence_Url")]
    pub evidence_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, is_woke: bool, pct: u8) -> EntityRecord {
        EntityRecord {
            name: name.to_string(),
            category: Category::Companies,
            is_woke,
            woke_percentage: pct,
            logo_url: Some("https://cdn.example.com/logo.png".to_string()),
            evidence_url: None,
        }
    }

    #[test]
    fn test_entity_creation() {
        let entity = Entity::from_record(record("Apple", true, 90)).unwrap();

        assert!(!entity.id.is_empty());
        assert_eq!(entity.name, "Apple");
        assert_eq!(entity.category, Category::Companies);
        assert!(entity.is_woke);
        assert_eq!(entity.woke_percentage, 90);
        assert_eq!(entity.logo_ref.as_deref(), Some("https://cdn.example.com/logo.png"));
        assert_eq!(entity.evidence_ref, None);
    }

    #[test]
    fn test_ids_are_fresh() {
        let a = Entity::from_record(record("Apple", true, 90)).unwrap();
        let b = Entity::from_record(record("Apple", true, 90)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_displayed_percentage() {
        let woke = Entity::from_record(record("Apple", true, 90)).unwrap();
        let not_woke = Entity::from_record(record("Goya", false, 25)).unwrap();

        assert_eq!(woke.displayed_percentage(), 90);
        assert_eq!(not_woke.displayed_percentage(), 75);
        assert_eq!(woke.status_label(), "WOKE");
        assert_eq!(not_woke.status_label(), "NOT WOKE");
    }

    #[test]
    fn test_displayed_percentage_bounds() {
        let zero = Entity::from_record(record("Zero", false, 0)).unwrap();
        let full = Entity::from_record(record("Full", false, 100)).unwrap();
        assert_eq!(zero.displayed_percentage(), 100);
        assert_eq!(full.displayed_percentage(), 0);
    }

    #[test]
    fn test_displayed_percentage_out_of_range_does_not_panic() {
        let mut entity = Entity::from_record(record("Hand Built", false, 25)).unwrap();
        entity.woke_percentage = 150;
        assert_eq!(entity.displayed_percentage(), 0);
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = Entity::from_record(record("   ", true, 50)).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName));
    }

    #[test]
    fn test_rejects_percentage_over_100() {
        let err = Entity::from_record(record("Overflow", true, 101)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::PercentageOutOfRange { value: 101, .. }
        ));
    }

    #[test]
    fn test_blank_refs_become_none() {
        let mut r = record("Blank", true, 10);
        r.logo_url = Some("  ".to_string());
        let entity = Entity::from_record(r).unwrap();
        assert_eq!(entity.logo_ref, None);
    }

    #[test]
    fn test_name_matching() {
        let entity = Entity::from_record(record("Hobby Lobby", false, 20)).unwrap();

        assert!(entity.name_contains(""));
        assert!(entity.name_contains("lobby"));
        assert!(entity.name_contains("BY LO"));
        assert!(!entity.name_contains("walmart"));

        assert!(entity.name_equals("hobby lobby"));
        assert!(entity.name_equals("HOBBY LOBBY"));
        assert!(!entity.name_equals("hobby"));
    }
}
