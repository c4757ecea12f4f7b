//! Error types for catalog loading and configuration.
//!
//! Queries and lookups never fail: an empty result or `None` is a normal
//! answer. Only building a catalog from external input or reading a config
//! file can go wrong.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Entity name must not be empty")]
    EmptyName,

    #[error("Woke percentage {value} for '{name}' is outside 0..=100")]
    PercentageOutOfRange { name: String, value: u8 },

    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    #[error("Row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: Box<CatalogError>,
    },

    #[error("Catalog file {path} contains no entities")]
    EmptyCatalog { path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("query.limit must be at least 1")]
    ZeroLimit,
}
