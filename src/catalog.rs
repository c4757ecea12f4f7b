// 📖 Catalog - the immutable, ordered entity list
//
// Built once at startup (from the compiled-in fixture or a CSV file) and
// then only ever read. Consumers receive `&Catalog` or `Arc<Catalog>`;
// there is no global registry and no mutation API.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::entities::{Category, Entity, EntityRecord};
use crate::error::CatalogError;
use crate::fixture;
use crate::query::{lookup_exact, CatalogQuery};

#[derive(Debug, Clone)]
pub struct Catalog {
    entities: Vec<Entity>,
    built_at: DateTime<Utc>,
    fingerprint: String,
}

impl Catalog {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// The compiled-in catalog
    ///
    /// A fixture row that fails validation is logged and left out.
    pub fn builtin() -> Self {
        match Self::from_records(fixture::records()) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(error = %e, "built-in fixture has invalid rows");
                let entities = fixture::records()
                    .into_iter()
                    .enumerate()
                    .filter_map(|(i, record)| match Entity::from_record(record) {
                        Ok(entity) => Some(entity),
                        Err(e) => {
                            tracing::warn!(row = i + 1, error = %e, "skipping built-in row");
                            None
                        }
                    })
                    .collect();
                Self::from_entities(entities)
            }
        }
    }

    /// Validate records and assign fresh ids, keeping record order
    pub fn from_records(records: Vec<EntityRecord>) -> Result<Self, CatalogError> {
        let mut entities = Vec::with_capacity(records.len());

        for (i, record) in records.into_iter().enumerate() {
            let entity = Entity::from_record(record).map_err(|e| CatalogError::InvalidRow {
                row: i + 1,
                source: Box::new(e),
            })?;
            entities.push(entity);
        }

        Ok(Self::from_entities(entities))
    }

    /// Load a catalog from a CSV file
    ///
    /// Headers: Name,Category,Is_Woke,Woke_Percentage,Logo_Url,Evidence_Url
    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        let mut rdr = csv::Reader::from_path(path)?;

        let mut records = Vec::new();
        for result in rdr.deserialize() {
            let record: EntityRecord = result?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(CatalogError::EmptyCatalog {
                path: path.to_path_buf(),
            });
        }

        let catalog = Self::from_records(records)?;
        tracing::info!(
            path = %path.display(),
            entities = catalog.len(),
            "loaded catalog from CSV"
        );
        Ok(catalog)
    }

    /// Builtin fixture when `path` is None, CSV file otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::from_csv_path(p),
            None => Ok(Self::builtin()),
        }
    }

    fn from_entities(entities: Vec<Entity>) -> Self {
        let fingerprint = compute_fingerprint(&entities);
        tracing::debug!(entities = entities.len(), %fingerprint, "catalog built");

        Catalog {
            entities,
            built_at: Utc::now(),
            fingerprint,
        }
    }

    // ========================================================================
    // EXPORT
    // ========================================================================

    /// Write the catalog as CSV (ids are not exported)
    pub fn write_csv(&self, path: &Path) -> Result<(), CatalogError> {
        let mut wtr = csv::Writer::from_path(path)?;
        for entity in &self.entities {
            wtr.serialize(entity.to_record())?;
        }
        wtr.flush()?;
        Ok(())
    }

    // ========================================================================
    // READ ACCESS
    // ========================================================================

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// SHA-256 over the ordered record contents (ids excluded)
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Find entity by id
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Number of entities in one (category, polarity) section
    pub fn count_by(&self, category: Category, is_woke: bool) -> usize {
        self.entities
            .iter()
            .filter(|e| e.category == category && e.is_woke == is_woke)
            .count()
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn query(&self, query: &CatalogQuery) -> Vec<&Entity> {
        query.run(self)
    }

    /// The main screen's section: category + polarity + search, top 5
    pub fn top_items(&self, category: Category, is_woke: bool, search: &str) -> Vec<&Entity> {
        CatalogQuery::new(category, is_woke).search(search).run(self)
    }

    /// Exact (case-insensitive) name lookup across the whole catalog
    pub fn lookup(&self, name: &str) -> Option<&Entity> {
        lookup_exact(self, name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

fn compute_fingerprint(entities: &[Entity]) -> String {
    let mut hasher = Sha256::new();
    for e in entities {
        hasher.update(format!(
            "{}|{}|{}|{}|{}|{}\n",
            e.name,
            e.category.slug(),
            e.is_woke,
            e.woke_percentage,
            e.logo_ref.as_deref().unwrap_or(""),
            e.evidence_ref.as_deref().unwrap_or(""),
        ));
    }
    format!("{:x}", hasher.finalize())
}
