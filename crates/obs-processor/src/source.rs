//! Dataset sources.
//!
//! The render core only ever sees [`obs_common::Observation`] records;
//! this module is the loader collaborator that produces them. Three CSV
//! layouts are accepted: indices only, indices plus weather, and the
//! full layout including wind direction.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use obs_common::{DashboardError, DashboardResult, Observation};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::frame::ObservationSet;

/// A source that the raw dataset is loaded from, once per process.
pub trait ObservationSource {
    fn load(&self) -> DashboardResult<ObservationSet>;
}

/// CSV-file dataset source.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One CSV row before conversion. Blank cells deserialize to `None`;
/// weather columns may be missing from the header entirely.
#[derive(Debug, Deserialize)]
struct RawRecord {
    lat: f64,
    lon: f64,
    date: String,
    #[serde(rename = "NDVI")]
    ndvi: Option<f64>,
    #[serde(rename = "NDWI")]
    ndwi: Option<f64>,
    #[serde(rename = "EVI")]
    evi: Option<f64>,
    #[serde(rename = "Temperature", default)]
    temperature: Option<f64>,
    #[serde(rename = "Rainfall", default)]
    rainfall: Option<f64>,
    #[serde(rename = "WindSpeed", default)]
    wind_speed: Option<f64>,
    #[serde(rename = "WindDirection", default)]
    wind_direction: Option<f64>,
}

impl RawRecord {
    fn into_observation(self) -> DashboardResult<Observation> {
        let date = parse_date(&self.date)?;
        Ok(Observation {
            lat: self.lat,
            lon: self.lon,
            date,
            // Blank index cells become NaN and classify as stressed
            // downstream; they are not load errors.
            ndvi: self.ndvi.unwrap_or(f64::NAN),
            ndwi: self.ndwi.unwrap_or(f64::NAN),
            evi: self.evi.unwrap_or(f64::NAN),
            temperature_c: self.temperature,
            rainfall_mm: self.rainfall,
            wind_speed_ms: self.wind_speed,
            wind_direction_deg: self.wind_direction,
        })
    }
}

/// Parse a dataset timestamp.
///
/// Accepts RFC 3339, "YYYY-MM-DD HH:MM:SS", and bare "YYYY-MM-DD"
/// (midnight UTC).
fn parse_date(s: &str) -> DashboardResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }
    if let Ok(nd) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ndt) = nd.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }
    Err(DashboardError::DatasetRead(format!(
        "unparseable date value: {}",
        s
    )))
}

impl ObservationSource for CsvSource {
    fn load(&self) -> DashboardResult<ObservationSet> {
        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| DashboardError::dataset_read(format!("{}: {}", self.path.display(), e)))?;

        let mut observations = Vec::new();
        for result in reader.deserialize::<RawRecord>() {
            let record =
                result.map_err(|e| DashboardError::dataset_read(format!("bad row: {}", e)))?;
            observations.push(record.into_observation()?);
        }

        info!(
            path = %self.path.display(),
            rows = observations.len(),
            "loaded observation dataset"
        );
        Ok(ObservationSet::new(observations))
    }
}
