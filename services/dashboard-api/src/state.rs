//! Application state and shared resources.

use std::sync::Arc;

use obs_common::DashboardResult;
use obs_processor::{CsvSource, DatasetCache, ObservationSet, ProcessorConfig};
use renderer::RenderStyle;

/// Shared application state: the load-once dataset cache and the render
/// style. Both are immutable after startup.
pub struct AppState {
    cache: DatasetCache<CsvSource>,
    pub style: RenderStyle,
}

impl AppState {
    pub fn new(config: &ProcessorConfig) -> DashboardResult<Self> {
        let style = match &config.style_path {
            Some(path) => RenderStyle::from_file(path)?,
            None => RenderStyle::default(),
        };

        Ok(Self {
            cache: DatasetCache::new(CsvSource::new(&config.dataset_path)),
            style,
        })
    }

    /// The dataset, loaded on first access and shared afterwards.
    pub fn dataset(&self) -> DashboardResult<Arc<ObservationSet>> {
        self.cache.get()
    }
}
