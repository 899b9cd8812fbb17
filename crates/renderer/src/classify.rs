//! NDVI health classification and marker colors.

use obs_common::Color;
use serde::{Deserialize, Serialize};

/// Discrete vegetation health category derived from the NDVI index.
///
/// Variants are ordered from least to most healthy so that `Ord`
/// reflects healthiness.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HealthCategory {
    Stressed,
    Moderate,
    Healthy,
}

impl HealthCategory {
    /// The fixed display color for this category.
    pub fn color(&self) -> Color {
        match self {
            HealthCategory::Healthy => Color::rgb(0, 128, 0),
            HealthCategory::Moderate => Color::rgb(255, 165, 0),
            HealthCategory::Stressed => Color::rgb(255, 0, 0),
        }
    }

    /// Lowercase display label.
    pub fn label(&self) -> &'static str {
        match self {
            HealthCategory::Healthy => "healthy",
            HealthCategory::Moderate => "moderate",
            HealthCategory::Stressed => "stressed",
        }
    }
}

impl std::fmt::Display for HealthCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an NDVI value into a health category.
///
/// Thresholds: `> 0.6` is Healthy, `> 0.4` is Moderate, everything else
/// is Stressed. Total over all inputs, including values outside the
/// nominal [-1, 1] range. Kept comparison-based so NaN fails every
/// comparison and lands in Stressed; missing readings classify as
/// Stressed by contract.
pub fn classify(ndvi: f64) -> HealthCategory {
    if ndvi > 0.6 {
        HealthCategory::Healthy
    } else if ndvi > 0.4 {
        HealthCategory::Moderate
    } else {
        HealthCategory::Stressed
    }
}

/// Marker color for an NDVI value.
pub fn marker_color(ndvi: f64) -> Color {
    classify(ndvi).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(classify(0.9), HealthCategory::Healthy);
        assert_eq!(classify(0.61), HealthCategory::Healthy);
        assert_eq!(classify(0.6), HealthCategory::Moderate);
        assert_eq!(classify(0.5), HealthCategory::Moderate);
        assert_eq!(classify(0.4), HealthCategory::Stressed);
        assert_eq!(classify(0.0), HealthCategory::Stressed);
        assert_eq!(classify(-0.3), HealthCategory::Stressed);
    }

    #[test]
    fn test_out_of_range_values_still_classify() {
        assert_eq!(classify(7.5), HealthCategory::Healthy);
        assert_eq!(classify(-7.5), HealthCategory::Stressed);
        assert_eq!(classify(f64::INFINITY), HealthCategory::Healthy);
        assert_eq!(classify(f64::NEG_INFINITY), HealthCategory::Stressed);
    }

    #[test]
    fn test_nan_classifies_as_stressed() {
        assert_eq!(classify(f64::NAN), HealthCategory::Stressed);
    }

    #[test]
    fn test_monotone_in_ndvi() {
        // Sweeping downward must never produce a healthier category.
        let mut prev = classify(2.0);
        let mut x = 2.0;
        while x > -2.0 {
            let cat = classify(x);
            assert!(cat <= prev, "inversion at ndvi={}", x);
            prev = cat;
            x -= 0.01;
        }
    }

    #[test]
    fn test_colors() {
        assert_eq!(
            HealthCategory::Healthy.color().to_array(),
            [0, 128, 0, 255]
        );
        assert_eq!(
            HealthCategory::Moderate.color().to_array(),
            [255, 165, 0, 255]
        );
        assert_eq!(
            HealthCategory::Stressed.color().to_array(),
            [255, 0, 0, 255]
        );
        assert_eq!(marker_color(f64::NAN).to_array(), [255, 0, 0, 255]);
    }
}
