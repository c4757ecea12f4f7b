// ⚙️ Configuration - TOML file with embedded defaults
//
// Resolution order: explicit path, then $WOKE_OR_NOT_CONFIG, then the
// embedded `config/default.toml`. Sections missing from a user file fall
// back to their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::query::DEFAULT_LIMIT;

pub const CONFIG_ENV: &str = "WOKE_OR_NOT_CONFIG";
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// CSV fixture; empty means the compiled-in catalog
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_level() -> String {
    "info".to_string()
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            limit: default_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: default_bind(),
        }
    }
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Embedded defaults
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.query.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(())
    }

    /// CSV fixture path, if one is configured
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let path = self.catalog.path.trim();
        if path.is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }
}

/// Load the effective configuration
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading config");
        return Config::from_path(path);
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            tracing::debug!(%path, "loading config from {}", CONFIG_ENV);
            return Config::from_path(Path::new(&path));
        }
    }

    Config::embedded()
}
