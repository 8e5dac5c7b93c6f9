use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::search::{CategoryFilter, QueryParams, SortKey};
use crate::storage::DocumentStore;

/// Display string for records without a recorded size.
pub const DEFAULT_SIZE_FALLBACK: &str = "2.4MB";

/// Registry configuration, read from an optional YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Start with the historical seed records.
    pub seed: bool,
    /// Sort key used when a query does not name one.
    pub default_sort: SortKey,
    /// Category filter used when a query does not name one.
    pub default_category: CategoryFilter,
    pub size_fallback: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            seed: true,
            default_sort: SortKey::default(),
            default_category: CategoryFilter::default(),
            size_fallback: DEFAULT_SIZE_FALLBACK.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|e| {
            RegistryError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml(&text)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Query parameters with the configured defaults and no search text.
    pub fn default_query(&self) -> QueryParams {
        QueryParams {
            search_text: String::new(),
            category_filter: self.default_category,
            sort_key: self.default_sort,
        }
    }

    /// The store a session starts with.
    pub fn build_store(&self) -> DocumentStore {
        if self.seed {
            DocumentStore::seeded()
        } else {
            DocumentStore::new()
        }
    }
}
