//! Sponsor index construction and persistence.

pub mod builder;
pub mod columns;
pub mod metadata;
pub mod pipeline;
pub mod registry;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use builder::{ConfigurationError, DEFAULT_SOURCE_LABEL, build_index, build_index_with_source};
pub use columns::detect_organisation_name_column;
pub use metadata::BuildMetadata;
pub use pipeline::{BuildPaths, build_index_files};
pub use registry::{RegistryRow, read_registry_csv, read_registry_from_reader};

/// Deduplicated mapping from canonical key to a representative display name.
///
/// Entries keep the order in which their keys were first seen in the registry.
/// That order is what the containment and token-overlap tiers iterate, so it is
/// part of the persisted document and survives a persist/load round trip.
///
/// There is no public way to mutate an index once built; a rebuilt registry
/// produces a new index that replaces the old one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SponsorIndex {
    names_by_key: IndexMap<String, String>,
}

impl SponsorIndex {
    /// Build an index from `(canonical key, display name)` pairs.
    ///
    /// The first pair for a given key wins; later duplicates are ignored.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut index = Self::default();
        for (key, name) in entries {
            index.insert_first(key.into(), name.into());
        }
        index
    }

    /// Insert `name` under `key` unless the key is already present.
    ///
    /// Returns `true` when the entry was inserted.
    pub(crate) fn insert_first(&mut self, key: String, name: String) -> bool {
        match self.names_by_key.entry(key) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(name);
                true
            }
        }
    }

    /// Display name stored for a canonical key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.names_by_key.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.names_by_key.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.names_by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names_by_key.is_empty()
    }

    /// Iterate `(key, display name)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names_by_key
            .iter()
            .map(|(key, name)| (key.as_str(), name.as_str()))
    }

    /// Parse an index from its JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse sponsor index JSON")
    }

    /// Serialize the index as a pretty-printed flat JSON object.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize sponsor index")
    }

    /// Load a persisted index document.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read sponsor index {:?}", path))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid sponsor index {:?}", path))
    }

    /// Write the index document, replacing any previous file.
    pub fn persist(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write sponsor index {:?}", path))
    }
}
