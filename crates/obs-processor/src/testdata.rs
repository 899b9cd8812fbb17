//! Test data generation utilities.
//!
//! Deterministic observation sets over the default area of interest,
//! with NDVI values that deliberately cross both classification
//! thresholds so tests exercise all three health categories.

use chrono::{NaiveDate, TimeZone, Utc};
use obs_common::{BoundingBox, Observation};

use crate::frame::ObservationSet;

/// First date emitted by the generators.
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid fixed date")
}

/// Generate `days * sites` observations: `sites` locations spread over
/// the default area of interest, one reading per location per day.
///
/// NDVI cycles through 0.75 / 0.50 / 0.20 by site index so every day
/// contains healthy, moderate, and stressed readings. Wind speed and
/// bearing vary deterministically with day and site.
pub fn demo_observations(days: u32, sites: usize) -> Vec<Observation> {
    let aoi = BoundingBox::default();
    let mut observations = Vec::with_capacity(days as usize * sites);

    for day in 0..days {
        let date = start_date() + chrono::Duration::days(day as i64);
        let ts = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight"));

        for site in 0..sites {
            let t = if sites > 1 {
                site as f64 / (sites - 1) as f64
            } else {
                0.5
            };
            let lat = aoi.min_lat + t * aoi.height();
            let lon = aoi.min_lon + t * aoi.width();

            let ndvi = match site % 3 {
                0 => 0.75,
                1 => 0.50,
                _ => 0.20,
            };
            let ndwi = 0.30 - 0.05 * t;
            let evi = 0.45 - 0.10 * t;

            let speed = 2.0 + (day as f64) + (site as f64) * 0.5;
            let bearing = ((day as usize * 90 + site * 45) % 360) as f64;

            observations.push(
                Observation::new(lat, lon, ts, ndvi, ndwi, evi)
                    .with_weather(15.0 + day as f64, 0.1 * site as f64)
                    .with_wind(speed, bearing),
            );
        }
    }

    observations
}

/// Generate a full observation set.
pub fn demo_set(days: u32, sites: usize) -> ObservationSet {
    ObservationSet::new(demo_observations(days, sites))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_shape() {
        let set = demo_set(3, 4);
        assert_eq!(set.len(), 12);
        assert_eq!(set.dates().len(), 3);
        for obs in set.observations() {
            assert!(BoundingBox::default().contains(obs.lon, obs.lat));
            assert!(obs.wind().is_some());
        }
    }

    #[test]
    fn test_all_categories_present_each_day() {
        let set = demo_set(1, 3);
        let ndvis: Vec<f64> = set.observations().iter().map(|o| o.ndvi).collect();
        assert!(ndvis.iter().any(|&n| n > 0.6));
        assert!(ndvis.iter().any(|&n| n > 0.4 && n <= 0.6));
        assert!(ndvis.iter().any(|&n| n <= 0.4));
    }
}
