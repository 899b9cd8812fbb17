//! Descriptive statistics over a daily frame.
//!
//! Matches the describe-table semantics the original dashboards display:
//! NaN values are dropped per column, the standard deviation is the
//! sample (N-1) form, and quantiles use linear interpolation between
//! the two nearest order statistics.

use chrono::NaiveDate;
use obs_common::{ColumnGroup, NumericColumn};
use serde::{Deserialize, Serialize};

use crate::frame::DailyFrame;

/// Descriptive statistics for one numeric column.
///
/// Aggregates are NaN when undefined (no finite values for everything,
/// fewer than two finite values for `std`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// Compute statistics over the finite values of a column.
    pub fn from_values(values: &[f64]) -> Self {
        let mut finite: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        finite.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let count = finite.len();
        if count == 0 {
            return Self {
                count: 0,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                median: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let n = count as f64;
        let mean = finite.iter().sum::<f64>() / n;
        let std = if count < 2 {
            f64::NAN
        } else {
            let ss = finite.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
            (ss / (n - 1.0)).sqrt()
        };

        Self {
            count,
            mean,
            std,
            min: finite[0],
            q25: quantile(&finite, 0.25),
            median: quantile(&finite, 0.50),
            q75: quantile(&finite, 0.75),
            max: finite[count - 1],
        }
    }
}

/// Linearly interpolated quantile over sorted values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lower = pos.floor() as usize;
    let frac = pos - lower as f64;
    if lower + 1 >= n {
        sorted[n - 1]
    } else {
        sorted[lower] + frac * (sorted[lower + 1] - sorted[lower])
    }
}

/// Statistics for one column plus its identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: NumericColumn,
    pub stats: ColumnStats,
}

/// The full describe table for one daily frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSummary {
    pub date: NaiveDate,
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}

impl FrameSummary {
    /// Statistics for a single column, if it exists in the dataset.
    pub fn get(&self, column: NumericColumn) -> Option<&ColumnStats> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| &c.stats)
    }

    /// Columns belonging to the vegetation table.
    pub fn vegetation(&self) -> impl Iterator<Item = &ColumnSummary> {
        self.group(ColumnGroup::Vegetation)
    }

    /// Columns belonging to the weather table.
    pub fn weather(&self) -> impl Iterator<Item = &ColumnSummary> {
        self.group(ColumnGroup::Weather)
    }

    fn group(&self, group: ColumnGroup) -> impl Iterator<Item = &ColumnSummary> {
        self.columns.iter().filter(move |c| c.column.group() == group)
    }
}

/// Compute the describe table for a frame, or `None` when it is empty.
///
/// Optional columns absent from every row of the dataset are omitted
/// from the table; columns present but all-NaN report count 0.
pub fn summarize(frame: &DailyFrame) -> Option<FrameSummary> {
    if frame.is_empty() {
        return None;
    }

    let columns = NumericColumn::all()
        .iter()
        .filter_map(|&column| {
            let values: Vec<f64> = frame
                .observations()
                .iter()
                .filter_map(|o| column.value(o))
                .collect();
            if values.is_empty() {
                return None;
            }
            Some(ColumnSummary {
                column,
                stats: ColumnStats::from_values(&values),
            })
        })
        .collect();

    Some(FrameSummary {
        date: frame.date,
        rows: frame.len(),
        columns,
    })
}
