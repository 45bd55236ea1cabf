//! Sponsor index builder.
//!
//! Turns registry rows into a [`SponsorIndex`] keyed by canonical name plus a
//! [`BuildMetadata`] record describing the pass.

use chrono::Utc;
use log::{debug, info};

use crate::sponsor_matching::index::SponsorIndex;
use crate::sponsor_matching::index::columns::detect_organisation_name_column;
use crate::sponsor_matching::index::metadata::BuildMetadata;
use crate::sponsor_matching::index::registry::RegistryRow;
use crate::sponsor_matching::normalize::normalize_company_name;

/// Source label recorded when the caller does not supply one.
pub const DEFAULT_SOURCE_LABEL: &str =
    "GOV.UK Register of Licensed Sponsors (Workers and Temporary Workers)";

/// Unrecoverable problems with the registry as a whole.
///
/// Per-row noise (blank names, suffix-only names, duplicates) is never an error;
/// those rows are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The registry contained zero records.
    EmptyRegistry,

    /// No header looks like an organisation-name column.
    MissingNameColumn { headers: Vec<String> },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRegistry => write!(f, "Registry parsed but contained zero records"),
            Self::MissingNameColumn { headers } => write!(
                f,
                "Could not detect organisation name column in headers: {:?}",
                headers
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Build an index labelled with [`DEFAULT_SOURCE_LABEL`].
pub fn build_index(
    rows: &[RegistryRow],
) -> Result<(SponsorIndex, BuildMetadata), ConfigurationError> {
    build_index_with_source(rows, DEFAULT_SOURCE_LABEL)
}

/// Build an index from registry rows.
///
/// The organisation-name column is detected from the first row's headers.
/// Each non-blank name is normalized; the first row producing a given key
/// supplies the display name and later rows with that key are dropped.
///
/// # Errors
/// [`ConfigurationError::EmptyRegistry`] when `rows` is empty and
/// [`ConfigurationError::MissingNameColumn`] when no header qualifies.
pub fn build_index_with_source(
    rows: &[RegistryRow],
    source: &str,
) -> Result<(SponsorIndex, BuildMetadata), ConfigurationError> {
    let first = rows.first().ok_or(ConfigurationError::EmptyRegistry)?;
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let name_column = detect_organisation_name_column(&headers)
        .ok_or_else(|| ConfigurationError::MissingNameColumn {
            headers: headers.iter().map(|h| h.to_string()).collect(),
        })?
        .to_string();
    info!("Detected organisation name column: {}", name_column);

    let mut index = SponsorIndex::default();
    let mut unique_keys = 0;
    let mut skipped = 0;

    for row in rows {
        let raw_name = row.get(&name_column).map(|v| v.trim()).unwrap_or_default();
        if raw_name.is_empty() {
            skipped += 1;
            continue;
        }

        let key = normalize_company_name(raw_name);
        if key.is_empty() {
            debug!("Skipping name with empty canonical key: {:?}", raw_name);
            skipped += 1;
            continue;
        }

        if index.insert_first(key, raw_name.to_string()) {
            unique_keys += 1;
        }
    }

    info!(
        "Indexed {} rows into {} unique keys ({} rows without a usable name)",
        rows.len(),
        unique_keys,
        skipped
    );

    let metadata = BuildMetadata::new(source, Utc::now(), &name_column, rows.len(), unique_keys);
    Ok((index, metadata))
}
