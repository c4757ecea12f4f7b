// 📚 Built-in fixture - the compiled-in catalog
//
// Ten entities per category: five WOKE followed by five NOT WOKE.
// Row order is the catalog order; queries never re-sort it.

use crate::entities::{Category, EntityRecord};

/// A fixture row as a compile-time constant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureRow {
    pub name: &'static str,
    pub category: Category,
    pub is_woke: bool,
    pub woke_percentage: u8,
    pub logo: &'static str,
    pub evidence: &'static str,
}

impl FixtureRow {
    pub fn to_record(&self) -> EntityRecord {
        EntityRecord {
            name: self.name.to_string(),
            category: self.category,
            is_woke: self.is_woke,
            woke_percentage: self.woke_percentage,
            logo_url: Some(self.logo.to_string()),
            evidence_url: Some(self.evidence.to_string()),
        }
    }
}

// ============================================================================
// STATIC FIXTURE DATA
// ============================================================================

pub const FIXTURE: &[FixtureRow] = &[
    // Companies - woke
    FixtureRow { name: "Apple", category: Category::Companies, is_woke: true, woke_percentage: 90, logo: "https://cdn.jsdelivr.net/gh/company-logos/apple.png", evidence: "https://example.com/apple-evidence" },
    FixtureRow { name: "Google", category: Category::Companies, is_woke: true, woke_percentage: 85, logo: "https://cdn.jsdelivr.net/gh/company-logos/google.png", evidence: "https://example.com/google-evidence" },
    FixtureRow { name: "Microsoft", category: Category::Companies, is_woke: true, woke_percentage: 80, logo: "https://cdn.jsdelivr.net/gh/company-logos/microsoft.png", evidence: "https://example.com/microsoft-evidence" },
    FixtureRow { name: "Amazon", category: Category::Companies, is_woke: true, woke_percentage: 75, logo: "https://cdn.jsdelivr.net/gh/company-logos/amazon.png", evidence: "https://example.com/amazon-evidence" },
    FixtureRow { name: "Nike", category: Category::Companies, is_woke: true, woke_percentage: 70, logo: "https://cdn.jsdelivr.net/gh/company-logos/nike.png", evidence: "https://example.com/nike-evidence" },

    // Companies - not woke
    FixtureRow { name: "Chick-fil-A", category: Category::Companies, is_woke: false, woke_percentage: 30, logo: "https://cdn.jsdelivr.net/gh/company-logos/chickfila.png", evidence: "https://example.com/chickfila-evidence" },
    FixtureRow { name: "Hobby Lobby", category: Category::Companies, is_woke: false, woke_percentage: 20, logo: "https://cdn.jsdelivr.net/gh/company-logos/hobbylobby.png", evidence: "https://example.com/hobbylobby-evidence" },
    FixtureRow { name: "Goya", category: Category::Companies, is_woke: false, woke_percentage: 25, logo: "https://cdn.jsdelivr.net/gh/company-logos/goya.png", evidence: "https://example.com/goya-evidence" },
    FixtureRow { name: "Home Depot", category: Category::Companies, is_woke: false, woke_percentage: 40, logo: "https://cdn.jsdelivr.net/gh/company-logos/homedepot.png", evidence: "https://example.com/homedepot-evidence" },
    FixtureRow { name: "Walmart", category: Category::Companies, is_woke: false, woke_percentage: 35, logo: "https://cdn.jsdelivr.net/gh/company-logos/walmart.png", evidence: "https://example.com/walmart-evidence" },

    // Countries - woke
    FixtureRow { name: "Canada", category: Category::Countries, is_woke: true, woke_percentage: 88, logo: "https://cdn.jsdelivr.net/gh/country-flags/canada.png", evidence: "https://example.com/canada-evidence" },
    FixtureRow { name: "Sweden", category: Category::Countries, is_woke: true, woke_percentage: 82, logo: "https://cdn.jsdelivr.net/gh/country-flags/sweden.png", evidence: "https://example.com/sweden-evidence" },
    FixtureRow { name: "Germany", category: Category::Countries, is_woke: true, woke_percentage: 78, logo: "https://cdn.jsdelivr.net/gh/country-flags/germany.png", evidence: "https://example.com/germany-evidence" },
    FixtureRow { name: "New Zealand", category: Category::Countries, is_woke: true, woke_percentage: 85, logo: "https://cdn.jsdelivr.net/gh/country-flags/newzealand.png", evidence: "https://example.com/newzealand-evidence" },
    FixtureRow { name: "Norway", category: Category::Countries, is_woke: true, woke_percentage: 80, logo: "https://cdn.jsdelivr.net/gh/country-flags/norway.png", evidence: "https://example.com/norway-evidence" },

    // Countries - not woke
    FixtureRow { name: "Russia", category: Category::Countries, is_woke: false, woke_percentage: 40, logo: "https://cdn.jsdelivr.net/gh/country-flags/russia.png", evidence: "https://example.com/russia-evidence" },
    FixtureRow { name: "China", category: Category::Countries, is_woke: false, woke_percentage: 30, logo: "https://cdn.jsdelivr.net/gh/country-flags/china.png", evidence: "https://example.com/china-evidence" },
    FixtureRow { name: "Saudi Arabia", category: Category::Countries, is_woke: false, woke_percentage: 25, logo: "https://cdn.jsdelivr.net/gh/country-flags/saudiarabia.png", evidence: "https://example.com/saudiarabia-evidence" },
    FixtureRow { name: "Iran", category: Category::Countries, is_woke: false, woke_percentage: 15, logo: "https://cdn.jsdelivr.net/gh/country-flags/iran.png", evidence: "https://example.com/iran-evidence" },
    FixtureRow { name: "North Korea", category: Category::Countries, is_woke: false, woke_percentage: 10, logo: "https://cdn.jsdelivr.net/gh/country-flags/northkorea.png", evidence: "https://example.com/northkorea-evidence" },

    // NonProfits - woke
    FixtureRow { name: "Greenpeace", category: Category::NonProfits, is_woke: true, woke_percentage: 85, logo: "https://cdn.jsdelivr.net/gh/nonprofit-logos/greenpeace.png", evidence: "https://example.com/greenpeace-evidence" },
    FixtureRow { name: "Amnesty International", category: Category::NonProfits, is_woke: true, woke_percentage: 82, logo: "https://cdn.jsdelivr.net/gh/nonprofit-logos/amnesty.png", evidence: "https://example.com/amnesty-evidence" },
    FixtureRow { name: "Doctors Without Borders", category: Category::NonProfits, is_woke: true, woke_percentage: 90, logo: "https://cdn.jsdelivr.net/gh/nonprofit-logos/doctors.png", evidence: "https://example.com/doctors-evidence" },
    FixtureRow { name: "Oxfam", category: Category::NonProfits, is_woke: true, woke_percentage: 78, logo: "https://cdn.jsdelivr.net/gh/nonprofit-logos/oxfam.png", evidence: "https://example.com/oxfam-evidence" },
    FixtureRow { name: "Red Cross", category: Category::NonProfits, is_woke: true, woke_percentage: 80, logo: "https://cdn.jsdelivr.net/gh/nonprofit-logos/redcross.png", evidence: "https://example.com/redcross-evidence" },

    // NonProfits - not woke
    FixtureRow { name: "Heritage Foundation", category: Category::NonProfits, is_woke: false, woke_percentage: 35, logo: "https://cdn.jsdelivr.net/gh/nonprofit-logos/heritage.png", evidence: "https://example.com/heritage-evidence" },
    FixtureRow { name: "NRA Foundation", category: Category::NonProfits, is_woke: false, woke_percentage: 20, logo: "https://cdn.jsdelivr.net/gh/nonprofit-logos/nra.png", evidence: "https://example.com/nra-evidence" },
    FixtureRow { name: "Family Research Council", category: Category::NonProfits, is_woke: false, woke_percentage: 25, logo: "https://cdn.jsdelivr.net/gh/nonprofit-logos/frc.png", evidence: "https://example.com/frc-evidence" },
    FixtureRow { name: "Turning Point USA", category: Category::NonProfits, is_woke: false, woke_percentage: 30, logo: "https://cdn.jsdelivr.net/gh/nonprofit-logos/tpusa.png", evidence: "https://example.com/tpusa-evidence" },
    FixtureRow { name: "PragerU", category: Category::NonProfits, is_woke: false, woke_percentage: 15, logo: "https://cdn.jsdelivr.net/gh/nonprofit-logos/prageru.png", evidence: "https://example.com/prageru-evidence" },

    // Educational - woke
    FixtureRow { name: "Harvard University", category: Category::Educational, is_woke: true, woke_percentage: 90, logo: "https://cdn.jsdelivr.net/gh/educational-logos/harvard.png", evidence: "https://example.com/harvard-evidence" },
    FixtureRow { name: "Stanford University", category: Category::Educational, is_woke: true, woke_percentage: 88, logo: "https://cdn.jsdelivr.net/gh/educational-logos/stanford.png", evidence: "https://example.com/stanford-evidence" },
    FixtureRow { name: "MIT", category: Category::Educational, is_woke: true, woke_percentage: 85, logo: "https://cdn.jsdelivr.net/gh/educational-logos/mit.png", evidence: "https://example.com/mit-evidence" },
    FixtureRow { name: "University of California, Berkeley", category: Category::Educational, is_woke: true, woke_percentage: 80, logo: "https://cdn.jsdelivr.net/gh/educational-logos/ucberkeley.png", evidence: "https://example.com/ucberkeley-evidence" },
    FixtureRow { name: "Columbia University", category: Category::Educational, is_woke: true, woke_percentage: 82, logo: "https://cdn.jsdelivr.net/gh/educational-logos/columbia.png", evidence: "https://example.com/columbia-evidence" },

    // Educational - not woke
    FixtureRow { name: "Liberty University", category: Category::Educational, is_woke: false, woke_percentage: 25, logo: "https://cdn.jsdelivr.net/gh/educational-logos/liberty.png", evidence: "https://example.com/liberty-evidence" },
    FixtureRow { name: "Hillsdale College", category: Category::Educational, is_woke: false, woke_percentage: 30, logo: "https://cdn.jsdelivr.net/gh/educational-logos/hillsdale.png", evidence: "https://example.com/hillsdale-evidence" },
    FixtureRow { name: "Bob Jones University", category: Category::Educational, is_woke: false, woke_percentage: 20, logo: "https://cdn.jsdelivr.net/gh/educational-logos/bobjones.png", evidence: "https://example.com/bobjones-evidence" },
    FixtureRow { name: "Brigham Young University", category: Category::Educational, is_woke: false, woke_percentage: 28, logo: "https://cdn.jsdelivr.net/gh/educational-logos/byu.png", evidence: "https://example.com/byu-evidence" },
    FixtureRow { name: "Patrick Henry College", category: Category::Educational, is_woke: false, woke_percentage: 22, logo: "https://cdn.jsdelivr.net/gh/educational-logos/patrickhenry.png", evidence: "https://example.com/patrickhenry-evidence" },

    // Media - woke
    FixtureRow { name: "CNN", category: Category::Media, is_woke: true, woke_percentage: 88, logo: "https://cdn.jsdelivr.net/gh/media-logos/cnn.png", evidence: "https://example.com/cnn-evidence" },
    FixtureRow { name: "BBC", category: Category::Media, is_woke: true, woke_percentage: 84, logo: "https://cdn.jsdelivr.net/gh/media-logos/bbc.png", evidence: "https://example.com/bbc-evidence" },
    FixtureRow { name: "New York Times", category: Category::Media, is_woke: true, woke_percentage: 80, logo: "https://cdn.jsdelivr.net/gh/media-logos/nyt.png", evidence: "https://example.com/nyt-evidence" },
    FixtureRow { name: "The Guardian", category: Category::Media, is_woke: true, woke_percentage: 82, logo: "https://cdn.jsdelivr.net/gh/media-logos/guardian.png", evidence: "https://example.com/guardian-evidence" },
    FixtureRow { name: "Al Jazeera", category: Category::Media, is_woke: true, woke_percentage: 78, logo: "https://cdn.jsdelivr.net/gh/media-logos/aljazeera.png", evidence: "https://example.com/aljazeera-evidence" },

    // Media - not woke
    FixtureRow { name: "Fox News", category: Category::Media, is_woke: false, woke_percentage: 35, logo: "https://cdn.jsdelivr.net/gh/media-logos/fox.png", evidence: "https://example.com/fox-evidence" },
    FixtureRow { name: "Breitbart", category: Category::Media, is_woke: false, woke_percentage: 20, logo: "https://cdn.jsdelivr.net/gh/media-logos/breitbart.png", evidence: "https://example.com/breitbart-evidence" },
    FixtureRow { name: "The Daily Wire", category: Category::Media, is_woke: false, woke_percentage: 30, logo: "https://cdn.jsdelivr.net/gh/media-logos/dailywire.png", evidence: "https://example.com/dailywire-evidence" },
    FixtureRow { name: "Newsmax", category: Category::Media, is_woke: false, woke_percentage: 28, logo: "https://cdn.jsdelivr.net/gh/media-logos/newsmax.png", evidence: "https://example.com/newsmax-evidence" },
    FixtureRow { name: "OANN", category: Category::Media, is_woke: false, woke_percentage: 25, logo: "https://cdn.jsdelivr.net/gh/media-logos/oann.png", evidence: "https://example.com/oann-evidence" },

    // Government - woke
    FixtureRow { name: "European Union", category: Category::Government, is_woke: true, woke_percentage: 85, logo: "https://cdn.jsdelivr.net/gh/government-logos/eu.png", evidence: "https://example.com/eu-evidence" },
    FixtureRow { name: "United Nations", category: Category::Government, is_woke: true, woke_percentage: 82, logo: "https://cdn.jsdelivr.net/gh/government-logos/un.png", evidence: "https://example.com/un-evidence" },
    FixtureRow { name: "World Health Organization", category: Category::Government, is_woke: true, woke_percentage: 78, logo: "https://cdn.jsdelivr.net/gh/government-logos/who.png", evidence: "https://example.com/who-evidence" },
    FixtureRow { name: "World Bank", category: Category::Government, is_woke: true, woke_percentage: 80, logo: "https://cdn.jsdelivr.net/gh/government-logos/worldbank.png", evidence: "https://example.com/worldbank-evidence" },
    FixtureRow { name: "NATO", category: Category::Government, is_woke: true, woke_percentage: 79, logo: "https://cdn.jsdelivr.net/gh/government-logos/nato.png", evidence: "https://example.com/nato-evidence" },

    // Government - not woke
    FixtureRow { name: "Department of Defense (USA)", category: Category::Government, is_woke: false, woke_percentage: 35, logo: "https://cdn.jsdelivr.net/gh/government-logos/dod.png", evidence: "https://example.com/dod-evidence" },
    FixtureRow { name: "Department of Justice (USA)", category: Category::Government, is_woke: false, woke_percentage: 30, logo: "https://cdn.jsdelivr.net/gh/government-logos/doj.png", evidence: "https://example.com/doj-evidence" },
    FixtureRow { name: "CIA", category: Category::Government, is_woke: false, woke_percentage: 28, logo: "https://cdn.jsdelivr.net/gh/government-logos/cia.png", evidence: "https://example.com/cia-evidence" },
    FixtureRow { name: "FBI", category: Category::Government, is_woke: false, woke_percentage: 27, logo: "https://cdn.jsdelivr.net/gh/government-logos/fbi.png", evidence: "https://example.com/fbi-evidence" },
    FixtureRow { name: "ICE", category: Category::Government, is_woke: false, woke_percentage: 22, logo: "https://cdn.jsdelivr.net/gh/government-logos/ice.png", evidence: "https://example.com/ice-evidence" },
];

/// Fixture rows as owned records, in catalog order
pub fn records() -> Vec<EntityRecord> {
    FIXTURE.iter().map(FixtureRow::to_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_size() {
        assert_eq!(FIXTURE.len(), 60);
    }

    #[test]
    fn test_every_category_has_five_of_each_polarity() {
        for category in Category::ALL {
            let woke = FIXTURE
                .iter()
                .filter(|r| r.category == category && r.is_woke)
                .count();
            let not_woke = FIXTURE
                .iter()
                .filter(|r| r.category == category && !r.is_woke)
                .count();
            assert_eq!(woke, 5, "{} woke", category);
            assert_eq!(not_woke, 5, "{} not woke", category);
        }
    }

    #[test]
    fn test_rows_are_valid() {
        let mut names = HashSet::new();
        for row in FIXTURE {
            assert!(!row.name.is_empty());
            assert!(row.woke_percentage <= 100);
            assert!(row.logo.starts_with("https://"));
            assert!(row.evidence.starts_with("https://"));
            assert!(names.insert(row.name.to_lowercase()), "duplicate {}", row.name);
        }
    }
}
