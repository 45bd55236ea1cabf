//! Provenance record written next to the sponsor index.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Describes how an index was built. Informational only; matching never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMetadata {
    pub source: String,
    pub generated_at_utc: String,
    pub organisation_name_column: String,
    pub rows_parsed: usize,
    pub unique_normalized_keys: usize,
}

impl BuildMetadata {
    pub fn new(
        source: &str,
        generated_at: DateTime<Utc>,
        organisation_name_column: &str,
        rows_parsed: usize,
        unique_normalized_keys: usize,
    ) -> Self {
        Self {
            source: source.to_string(),
            generated_at_utc: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            organisation_name_column: organisation_name_column.to_string(),
            rows_parsed,
            unique_normalized_keys,
        }
    }

    /// Fraction of parsed rows that ended up as distinct keys.
    pub fn dedup_ratio(&self) -> f64 {
        if self.rows_parsed == 0 {
            return 0.0;
        }
        self.unique_normalized_keys as f64 / self.rows_parsed as f64
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read build metadata {:?}", path))?;
        serde_json::from_str(&json).with_context(|| format!("Invalid build metadata {:?}", path))
    }

    pub fn persist(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize build metadata")?;
        fs::write(path, json).with_context(|| format!("Failed to write build metadata {:?}", path))
    }
}
