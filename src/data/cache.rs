//! Keyed dataset cache.
//!
//! The first load of a path reads and parses the file; later loads of the
//! same path hand out the same `Arc<Dataset>` without touching the disk.
//! Entries live until [`invalidate`] / [`clear_cache`] (or the matching
//! [`DatasetCache`] methods) or process exit. There is no file watching.

use crate::data::csv_parser::load_dataset;
use crate::data::error::DataResult;
use crate::perf::ScopedTimer;
use crate::types::Dataset;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// Loads above this threshold (ms) are logged as slow
const SLOW_LOAD_MS: f64 = 500.0;

/// Process-wide cache used by [`load`]
static DATASET_CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

/// Memoizing loader keyed by source path
#[derive(Default)]
pub struct DatasetCache {
    entries: RwLock<HashMap<PathBuf, Arc<Dataset>>>,
    /// Number of loads that actually read the file
    loads: AtomicUsize,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, reading the file on first use.
    ///
    /// Failed loads are not cached, so a fixed file is picked up on the
    /// next call.
    pub fn load(&self, path: &Path) -> DataResult<Arc<Dataset>> {
        if let Some(dataset) = self.get(path) {
            debug!("Dataset cache hit for {}", path.display());
            return Ok(dataset);
        }

        let mut entries = self.entries.write();
        // Another caller may have populated the entry while we waited for the lock
        if let Some(dataset) = entries.get(path) {
            return Ok(Arc::clone(dataset));
        }

        let dataset = {
            let _timer = ScopedTimer::new("load_dataset", SLOW_LOAD_MS);
            Arc::new(load_dataset(path)?)
        };
        self.loads.fetch_add(1, Ordering::SeqCst);
        info!(
            "Loaded {} album records from {}",
            dataset.len(),
            path.display()
        );

        entries.insert(path.to_path_buf(), Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Cached dataset for `path`, if any, without loading
    pub fn get(&self, path: &Path) -> Option<Arc<Dataset>> {
        self.entries.read().get(path).cloned()
    }

    /// Drop the entry for `path`; returns whether one existed
    pub fn invalidate(&self, path: &Path) -> bool {
        self.entries.write().remove(path).is_some()
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of file reads performed so far
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of cached paths
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Load `path` through the process-wide cache
pub fn load(path: &Path) -> DataResult<Arc<Dataset>> {
    DATASET_CACHE.load(path)
}

/// Cached dataset for `path` in the process-wide cache, without loading
pub fn cached(path: &Path) -> Option<Arc<Dataset>> {
    DATASET_CACHE.get(path)
}

/// Drop `path` from the process-wide cache; returns whether it was cached
pub fn invalidate(path: &Path) -> bool {
    let removed = DATASET_CACHE.invalidate(path);
    if removed {
        debug!("Invalidated cached dataset {}", path.display());
    }
    removed
}

/// Empty the process-wide cache
pub fn clear_cache() {
    DATASET_CACHE.clear();
    debug!("Cleared dataset cache");
}

/// File reads performed by the process-wide cache
pub fn load_count() -> usize {
    DATASET_CACHE.load_count()
}
