//! Render style configuration.
//!
//! Display-fitting constants (marker radius, arrow scales, colors) are
//! caller-supplied configuration, loaded from a JSON file or defaulted.
//! None of them carry semantic meaning beyond fitting geometry to the
//! chosen rendering surface.

use obs_common::{Color, DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Style knobs for layer building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Marker radius in meters.
    #[serde(default = "default_marker_radius")]
    pub marker_radius_m: f64,

    /// Color for wind geometry (lines, icons, glyphs).
    #[serde(default = "default_wind_color")]
    pub wind_color: Color,

    /// Wind line width in pixels.
    #[serde(default = "default_wind_line_width")]
    pub wind_line_width: f64,

    /// Scale converting wind speed (m/s) to a lon/lat offset in degrees.
    #[serde(default = "default_map_offset_scale")]
    pub map_offset_scale: f64,

    /// Pixel multiplier applied to wind speed for icon sizing.
    #[serde(default = "default_icon_size_scale")]
    pub icon_size_scale: f64,

    /// Base text size for compass glyphs.
    #[serde(default = "default_glyph_base_size")]
    pub glyph_base_size: f64,

    /// Additional glyph size per m/s of wind speed.
    #[serde(default = "default_glyph_size_per_ms")]
    pub glyph_size_per_ms: f64,

    /// Divisor applied to quiver arrow length on cartesian plots.
    #[serde(default = "default_quiver_scale_divisor")]
    pub quiver_scale_divisor: f64,

    /// Initial map zoom level.
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_marker_radius() -> f64 {
    200.0
}
fn default_wind_color() -> Color {
    Color::rgb(0, 0, 255)
}
fn default_wind_line_width() -> f64 {
    2.0
}
fn default_map_offset_scale() -> f64 {
    0.0005
}
fn default_icon_size_scale() -> f64 {
    200.0
}
fn default_glyph_base_size() -> f64 {
    10.0
}
fn default_glyph_size_per_ms() -> f64 {
    2.0
}
fn default_quiver_scale_divisor() -> f64 {
    10.0
}
fn default_zoom() -> f64 {
    12.0
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            marker_radius_m: default_marker_radius(),
            wind_color: default_wind_color(),
            wind_line_width: default_wind_line_width(),
            map_offset_scale: default_map_offset_scale(),
            icon_size_scale: default_icon_size_scale(),
            glyph_base_size: default_glyph_base_size(),
            glyph_size_per_ms: default_glyph_size_per_ms(),
            quiver_scale_divisor: default_quiver_scale_divisor(),
            zoom: default_zoom(),
        }
    }
}

impl RenderStyle {
    /// Parse a style from a JSON string.
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        let style: Self =
            serde_json::from_str(json).map_err(|e| DashboardError::StyleError(e.to_string()))?;
        style.validate().map_err(DashboardError::StyleError)?;
        Ok(style)
    }

    /// Load a style from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DashboardError::StyleError(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Validate the style values.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.marker_radius_m > 0.0) {
            return Err("marker_radius_m must be > 0".to_string());
        }
        if !(self.map_offset_scale > 0.0) {
            return Err("map_offset_scale must be > 0".to_string());
        }
        if !(self.quiver_scale_divisor > 0.0) {
            return Err("quiver_scale_divisor must be > 0".to_string());
        }
        if !(self.glyph_base_size > 0.0) {
            return Err("glyph_base_size must be > 0".to_string());
        }
        Ok(())
    }

    /// Text size for a compass glyph at the given wind speed.
    pub fn glyph_size(&self, speed_ms: f64) -> f64 {
        self.glyph_base_size + self.glyph_size_per_ms * speed_ms
    }
}
