//! Process-scoped, load-once handle to a persisted sponsor index.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::Result;
use log::info;

use crate::sponsor_matching::index::SponsorIndex;

/// Lazily loads a sponsor index document the first time it is needed.
///
/// Once loaded, the same `Arc` is handed out for the lifetime of the handle.
/// The cache is never invalidated; picking up a rebuilt index requires a new
/// handle. A failed load leaves the handle empty so a later call can retry.
#[derive(Debug)]
pub struct SponsorIndexCache {
    path: PathBuf,
    index: OnceLock<Arc<SponsorIndex>>,
}

impl SponsorIndexCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            index: OnceLock::new(),
        }
    }

    /// Handle that is already populated, for callers holding an in-memory index.
    pub fn preloaded(path: impl Into<PathBuf>, index: SponsorIndex) -> Self {
        let cache = Self::new(path);
        let _ = cache.index.set(Arc::new(index));
        cache
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.index.get().is_some()
    }

    /// Return the cached index, reading it from disk on first use.
    pub fn get_or_load(&self) -> Result<Arc<SponsorIndex>> {
        if let Some(index) = self.index.get() {
            return Ok(Arc::clone(index));
        }

        let loaded = SponsorIndex::load(&self.path)?;
        info!(
            "Loaded sponsor index with {} keys from {:?}",
            loaded.len(),
            self.path
        );

        // Concurrent first loads race here; whichever set wins is shared by all.
        let index = self.index.get_or_init(|| Arc::new(loaded));
        Ok(Arc::clone(index))
    }
}
