//! Load-once dataset cache.
//!
//! The raw dataset is loaded exactly once per process and shared across
//! all subsequent render passes. The dataset is treated as immutable, so
//! there is no invalidation and no eviction; only the load boundary is
//! memoized, never the filter/classify results.

use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::frame::ObservationSet;
use crate::source::ObservationSource;
use obs_common::DashboardResult;

/// Counters describing cache behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub loaded: bool,
}

/// Memoizing wrapper around an [`ObservationSource`].
pub struct DatasetCache<S> {
    source: S,
    cell: OnceCell<Arc<ObservationSet>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<S: ObservationSource> DatasetCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get the dataset, loading it on first use. A failed load is not
    /// memoized; the next call retries.
    pub fn get(&self) -> DashboardResult<Arc<ObservationSet>> {
        if let Some(set) = self.cell.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(set));
        }

        let set = self.cell.get_or_try_init(|| {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!("dataset cache miss, loading from source");
            self.source.load().map(Arc::new)
        })?;
        Ok(Arc::clone(set))
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            loaded: self.cell.get().is_some(),
        }
    }
}
