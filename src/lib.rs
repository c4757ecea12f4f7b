// Woke or Not - Core Library
// Exposes the catalog, queries and config for the CLI, TUI, API server and tests

pub mod entities;
pub mod error;
pub mod fixture;
pub mod catalog;
pub mod query;
pub mod config;
pub mod logo;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use entities::{Category, Entity, EntityRecord, MAX_PERCENTAGE};
pub use error::{CatalogError, ConfigError};
pub use catalog::Catalog;
pub use query::{lookup_exact, CatalogQuery, DEFAULT_LIMIT};
pub use config::{load_config, Config};
pub use logo::{LinkLogoLoader, LogoImage, LogoLoader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
