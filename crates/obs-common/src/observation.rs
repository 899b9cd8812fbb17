//! Observation records: one sensor reading at one location on one date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single reading at one location and date.
///
/// Vegetation indices are plain `f64` and may be NaN when the source cell
/// was blank; NaN is a legal value all the way through classification.
/// Weather fields are optional because two of the supported dataset
/// layouts omit them entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Reading timestamp. Selection works at day granularity; any
    /// time-of-day component is carried but ignored by filtering.
    pub date: DateTime<Utc>,
    /// Normalized Difference Vegetation Index, nominally in [-1, 1].
    pub ndvi: f64,
    /// Normalized Difference Water Index, carried through unchanged.
    pub ndwi: f64,
    /// Enhanced Vegetation Index, carried through unchanged.
    pub evi: f64,
    /// Air temperature in °C.
    pub temperature_c: Option<f64>,
    /// Rainfall in mm.
    pub rainfall_mm: Option<f64>,
    /// Wind speed in m/s.
    pub wind_speed_ms: Option<f64>,
    /// Wind direction as a compass bearing in degrees (0 = north,
    /// increasing clockwise).
    pub wind_direction_deg: Option<f64>,
}

impl Observation {
    /// Create an observation carrying only vegetation indices.
    pub fn new(lat: f64, lon: f64, date: DateTime<Utc>, ndvi: f64, ndwi: f64, evi: f64) -> Self {
        Self {
            lat,
            lon,
            date,
            ndvi,
            ndwi,
            evi,
            temperature_c: None,
            rainfall_mm: None,
            wind_speed_ms: None,
            wind_direction_deg: None,
        }
    }

    /// Attach temperature and rainfall readings.
    pub fn with_weather(mut self, temperature_c: f64, rainfall_mm: f64) -> Self {
        self.temperature_c = Some(temperature_c);
        self.rainfall_mm = Some(rainfall_mm);
        self
    }

    /// Attach a wind reading (speed in m/s, direction as compass bearing).
    pub fn with_wind(mut self, speed_ms: f64, direction_deg: f64) -> Self {
        self.wind_speed_ms = Some(speed_ms);
        self.wind_direction_deg = Some(direction_deg);
        self
    }

    /// The calendar date of this reading (time-of-day discarded).
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// The wind measurement as a (speed, bearing) pair, if both present.
    pub fn wind(&self) -> Option<(f64, f64)> {
        match (self.wind_speed_ms, self.wind_direction_deg) {
            (Some(speed), Some(dir)) => Some((speed, dir)),
            _ => None,
        }
    }
}

/// Which statistics table a column belongs to. The original dashboards
/// present vegetation and weather summaries separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnGroup {
    Vegetation,
    Weather,
}

/// Numeric columns that descriptive statistics are computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericColumn {
    Ndvi,
    Ndwi,
    Evi,
    Temperature,
    Rainfall,
    WindSpeed,
    WindDirection,
}

impl NumericColumn {
    /// All columns in display order.
    pub fn all() -> &'static [NumericColumn] {
        &[
            NumericColumn::Ndvi,
            NumericColumn::Ndwi,
            NumericColumn::Evi,
            NumericColumn::Temperature,
            NumericColumn::Rainfall,
            NumericColumn::WindSpeed,
            NumericColumn::WindDirection,
        ]
    }

    /// The CSV header this column is loaded from.
    pub fn header(&self) -> &'static str {
        match self {
            NumericColumn::Ndvi => "NDVI",
            NumericColumn::Ndwi => "NDWI",
            NumericColumn::Evi => "EVI",
            NumericColumn::Temperature => "Temperature",
            NumericColumn::Rainfall => "Rainfall",
            NumericColumn::WindSpeed => "WindSpeed",
            NumericColumn::WindDirection => "WindDirection",
        }
    }

    /// Which summary table this column is shown in.
    pub fn group(&self) -> ColumnGroup {
        match self {
            NumericColumn::Ndvi | NumericColumn::Ndwi | NumericColumn::Evi => {
                ColumnGroup::Vegetation
            }
            _ => ColumnGroup::Weather,
        }
    }

    /// Read this column from an observation. Absent optional columns
    /// return `None`; blank index cells surface as `Some(NaN)`.
    pub fn value(&self, obs: &Observation) -> Option<f64> {
        match self {
            NumericColumn::Ndvi => Some(obs.ndvi),
            NumericColumn::Ndwi => Some(obs.ndwi),
            NumericColumn::Evi => Some(obs.evi),
            NumericColumn::Temperature => obs.temperature_c,
            NumericColumn::Rainfall => obs.rainfall_mm,
            NumericColumn::WindSpeed => obs.wind_speed_ms,
            NumericColumn::WindDirection => obs.wind_direction_deg,
        }
    }
}

impl std::fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn obs() -> Observation {
        Observation::new(
            47.6,
            13.0,
            Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap(),
            0.72,
            0.31,
            0.45,
        )
        .with_weather(18.5, 0.2)
        .with_wind(4.2, 225.0)
    }

    #[test]
    fn test_day_discards_time() {
        assert_eq!(
            obs().day(),
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
        );
    }

    #[test]
    fn test_wind_pair() {
        assert_eq!(obs().wind(), Some((4.2, 225.0)));

        let mut bare = obs();
        bare.wind_direction_deg = None;
        assert_eq!(bare.wind(), None);
    }

    #[test]
    fn test_column_values() {
        let o = obs();
        assert_eq!(NumericColumn::Ndvi.value(&o), Some(0.72));
        assert_eq!(NumericColumn::Temperature.value(&o), Some(18.5));

        let bare = Observation::new(0.0, 0.0, o.date, 0.1, 0.2, 0.3);
        assert_eq!(NumericColumn::WindSpeed.value(&bare), None);
    }

    #[test]
    fn test_column_groups() {
        assert_eq!(NumericColumn::Evi.group(), ColumnGroup::Vegetation);
        assert_eq!(NumericColumn::Rainfall.group(), ColumnGroup::Weather);
    }
}
