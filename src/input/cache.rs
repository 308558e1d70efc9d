//! Caller-owned cache of loaded shipment batches

use crate::input::{load_batch, LoadError};
use crate::shipment::RawShipment;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loaded batches keyed by file path and record limit
///
/// Entries live until explicitly invalidated; the cache never checks file
/// modification times.
#[derive(Debug, Default)]
pub struct BatchCache {
    entries: DashMap<(PathBuf, usize), Arc<Vec<RawShipment>>>,
}

impl BatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached batch for `path`, loading it on first use
    pub fn load(&self, path: &Path, limit: usize) -> Result<Arc<Vec<RawShipment>>, LoadError> {
        let key = (path.to_path_buf(), limit);
        if let Some(rows) = self.entries.get(&key) {
            tracing::debug!(path = %path.display(), "Shipment batch cache hit");
            return Ok(Arc::clone(rows.value()));
        }

        let rows = Arc::new(load_batch(path, limit)?);
        self.entries.insert(key, Arc::clone(&rows));
        Ok(rows)
    }

    /// Drop every cached batch for `path`; returns whether anything was removed
    pub fn invalidate(&self, path: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(cached, _), _| cached != path);
        before != self.entries.len()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
