// 🔎 Catalog Query - filter and truncate
//
// "Which entities match category C, polarity P and search term S,
//  limited to the top N?"
//
// The result keeps catalog order. Nothing is re-sorted by score or name.

use crate::catalog::Catalog;
use crate::entities::{Category, Entity};

/// Rows shown per section on the main screen
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: Category,
    pub is_woke: bool,

    /// Case-insensitive substring filter on the name; empty matches everything
    pub search: String,

    pub limit: usize,
}

impl CatalogQuery {
    pub fn new(category: Category, is_woke: bool) -> Self {
        CatalogQuery {
            category,
            is_woke,
            search: String::new(),
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Predicate half of the query (no truncation)
    pub fn matches(&self, entity: &Entity) -> bool {
        entity.category == self.category
            && entity.is_woke == self.is_woke
            && entity.name_contains(&self.search)
    }

    /// Run against a catalog: stable filter, then take `limit`
    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Entity> {
        let results: Vec<&Entity> = catalog
            .iter()
            .filter(|e| self.matches(e))
            .take(self.limit)
            .collect();

        tracing::trace!(
            category = self.category.slug(),
            is_woke = self.is_woke,
            search = %self.search,
            limit = self.limit,
            hits = results.len(),
            "catalog query"
        );

        results
    }
}

/// Exact-match lookup across every category and both polarities.
///
/// Returns the first entity in catalog order whose whole name equals
/// `name` ignoring case. `None` is a normal outcome.
pub fn lookup_exact<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a Entity> {
    let found = catalog.iter().find(|e| e.name_equals(name));
    tracing::trace!(name, found = found.is_some(), "exact lookup");
    found
}
