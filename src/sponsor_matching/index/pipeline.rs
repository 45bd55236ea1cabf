//! File-to-file index build: registry CSV in, index and metadata documents out.

use std::path::Path;

use anyhow::{Result, bail};
use log::info;

use crate::sponsor_matching::index::builder::build_index_with_source;
use crate::sponsor_matching::index::metadata::BuildMetadata;
use crate::sponsor_matching::index::registry::read_registry_csv;

/// Where the build reads from and writes to.
#[derive(Debug, Clone, Copy)]
pub struct BuildPaths<'a> {
    pub registry_csv: &'a Path,
    pub index_json: &'a Path,
    pub metadata_json: &'a Path,
}

/// Read the registry CSV, build the index and write both output documents.
///
/// Nothing is written when the input is missing, has no records or has no
/// detectable organisation-name column.
pub fn build_index_files(paths: BuildPaths<'_>, source: &str) -> Result<BuildMetadata> {
    if !paths.registry_csv.exists() {
        bail!("Missing CSV at: {}", paths.registry_csv.display());
    }

    let rows = read_registry_csv(paths.registry_csv)?;
    let (index, metadata) = build_index_with_source(&rows, source)?;

    index.persist(paths.index_json)?;
    metadata.persist(paths.metadata_json)?;
    info!(
        "Wrote {} keys to {:?} and metadata to {:?}",
        index.len(),
        paths.index_json,
        paths.metadata_json
    );

    Ok(metadata)
}
