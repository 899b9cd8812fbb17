//! Observation set container and per-date frames.

use chrono::NaiveDate;
use obs_common::Observation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::stats::{summarize, FrameSummary};

/// The full in-memory dataset, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSet {
    observations: Vec<Observation>,
}

impl ObservationSet {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Total number of rows.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Sorted distinct calendar dates present in the dataset.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations
            .iter()
            .map(|o| o.day())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First and last calendar date, if the set is non-empty.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates = self.dates();
        Some((*dates.first()?, *dates.last()?))
    }

    /// Select all observations whose date component equals the selected
    /// date. Time-of-day, if present, is ignored.
    pub fn frame_for(&self, date: NaiveDate) -> DailyFrame {
        let observations = self
            .observations
            .iter()
            .filter(|o| o.day() == date)
            .cloned()
            .collect();
        DailyFrame { date, observations }
    }
}

/// The subset of observations for one selected date: the unit a render
/// pass operates on. Re-computed from scratch on every selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFrame {
    pub date: NaiveDate,
    observations: Vec<Observation>,
}

impl DailyFrame {
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// An empty frame is the "no data" condition; callers must branch on
    /// this instead of rendering layers or statistics.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Descriptive statistics over this frame, or `None` when the frame
    /// is empty.
    pub fn summary(&self) -> Option<FrameSummary> {
        summarize(self)
    }
}
