//! Dataset handling for forest health observations.
//!
//! Holds the in-memory observation set, the per-date filter that feeds a
//! render pass, per-column descriptive statistics, the CSV source
//! behind the [`ObservationSource`] boundary, and the load-once dataset
//! cache.

pub mod cache;
pub mod config;
pub mod frame;
pub mod source;
pub mod stats;
pub mod testdata;

pub use cache::{CacheStats, DatasetCache};
pub use config::ProcessorConfig;
pub use frame::{DailyFrame, ObservationSet};
pub use source::{CsvSource, ObservationSource};
pub use stats::{ColumnStats, ColumnSummary, FrameSummary};
