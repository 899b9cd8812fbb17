//! Layer-spec assembly.
//!
//! The original system was six near-identical dashboards differing only
//! in how wind was drawn. Here the rendering style is a single strategy
//! selection: [`LayerVariant`] picks which wind geometry accompanies the
//! color-coded markers, and [`build_layers`] emits serializable layer
//! specs for an external map or plot renderer.

use obs_common::{BoundingBox, DashboardError, DashboardResult, Observation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::classify;
use crate::glyphs::arrow_for_bearing;
use crate::style::RenderStyle;
use crate::wind::{cartesian_components, displaced_endpoint};

/// Which wind rendering accompanies the health markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerVariant {
    /// Color-coded markers only.
    Markers,
    /// Lines from each point to its wind-displaced endpoint.
    WindLines,
    /// Icons rotated by the wind bearing, sized by speed.
    WindIcons,
    /// Compass-arrow text glyphs sized by speed.
    WindGlyphs,
    /// Cartesian quiver arrows for a static x/y plot.
    WindField,
}

impl LayerVariant {
    /// Parse from a query-string value (case-insensitive).
    pub fn parse(s: &str) -> DashboardResult<Self> {
        match s.to_lowercase().as_str() {
            "markers" => Ok(Self::Markers),
            "wind_lines" => Ok(Self::WindLines),
            "wind_icons" => Ok(Self::WindIcons),
            "wind_glyphs" => Ok(Self::WindGlyphs),
            "wind_field" => Ok(Self::WindField),
            other => Err(DashboardError::UnknownVariant(other.to_string())),
        }
    }

    /// All variants, for capability listings.
    pub fn all() -> &'static [LayerVariant] {
        &[
            LayerVariant::Markers,
            LayerVariant::WindLines,
            LayerVariant::WindIcons,
            LayerVariant::WindGlyphs,
            LayerVariant::WindField,
        ]
    }
}

impl std::fmt::Display for LayerVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LayerVariant::Markers => "markers",
            LayerVariant::WindLines => "wind_lines",
            LayerVariant::WindIcons => "wind_icons",
            LayerVariant::WindGlyphs => "wind_glyphs",
            LayerVariant::WindField => "wind_field",
        };
        f.write_str(s)
    }
}

/// Initial camera position for a map render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

impl ViewState {
    /// Center the view on the mean coordinates of the observations.
    /// Falls back to the default area of interest for an empty slice.
    pub fn for_observations(observations: &[Observation], zoom: f64) -> Self {
        let (longitude, latitude) = if observations.is_empty() {
            BoundingBox::default().center()
        } else {
            let n = observations.len() as f64;
            let lat = observations.iter().map(|o| o.lat).sum::<f64>() / n;
            let lon = observations.iter().map(|o| o.lon).sum::<f64>() / n;
            (lon, lat)
        };
        Self {
            latitude,
            longitude,
            zoom,
            pitch: 0.0,
        }
    }
}

/// A color-coded health marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    pub lon: f64,
    pub lat: f64,
    /// RGBA fill color from the health classification.
    pub color: [u8; 4],
    /// Health category label for tooltips.
    pub category: String,
    pub ndvi: f64,
}

/// A wind line from a point to its displaced endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindLineSegment {
    pub source: [f64; 2],
    pub target: [f64; 2],
}

/// A rotated, speed-sized wind icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindIconPoint {
    pub lon: f64,
    pub lat: f64,
    /// Rotation in compass degrees.
    pub angle_deg: f64,
    /// Unscaled size; multiplied by the style's icon size scale.
    pub size: f64,
}

/// A compass-arrow text glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindGlyphPoint {
    pub lon: f64,
    pub lat: f64,
    pub text: String,
    pub size: f64,
}

/// A quiver arrow on a cartesian lon/lat plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuiverArrow {
    pub x: f64,
    pub y: f64,
    pub u: f64,
    pub v: f64,
}

/// One renderable layer spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer {
    Scatter {
        radius_m: f64,
        points: Vec<MarkerPoint>,
    },
    WindLines {
        width: f64,
        color: [u8; 4],
        segments: Vec<WindLineSegment>,
    },
    WindIcons {
        size_scale: f64,
        color: [u8; 4],
        icons: Vec<WindIconPoint>,
    },
    WindGlyphs {
        color: [u8; 4],
        glyphs: Vec<WindGlyphPoint>,
    },
    WindField {
        scale_divisor: f64,
        arrows: Vec<QuiverArrow>,
    },
}

/// The full output of one render pass for one selected date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStack {
    pub view: ViewState,
    pub layers: Vec<Layer>,
}

/// Build the layer stack for a day of observations.
///
/// Every variant emits the health marker layer; the wind variants add
/// their geometry on top. Observations without a complete wind reading
/// contribute a marker but no wind geometry. Callers are expected to
/// branch on emptiness before rendering; an empty slice still produces
/// a well-formed (empty) stack centered on the default area of interest.
pub fn build_layers(
    observations: &[Observation],
    variant: LayerVariant,
    style: &RenderStyle,
) -> LayerStack {
    let view = ViewState::for_observations(observations, style.zoom);

    let points: Vec<MarkerPoint> = observations
        .iter()
        .map(|o| {
            let category = classify(o.ndvi);
            MarkerPoint {
                lon: o.lon,
                lat: o.lat,
                color: category.color().to_array(),
                category: category.label().to_string(),
                ndvi: o.ndvi,
            }
        })
        .collect();

    let mut layers = vec![Layer::Scatter {
        radius_m: style.marker_radius_m,
        points,
    }];

    match variant {
        LayerVariant::Markers => {}
        LayerVariant::WindLines => {
            let segments: Vec<WindLineSegment> = observations
                .iter()
                .filter_map(|o| {
                    let (speed, bearing) = o.wind()?;
                    let (end_lon, end_lat) =
                        displaced_endpoint(o.lon, o.lat, speed, bearing, style.map_offset_scale);
                    Some(WindLineSegment {
                        source: [o.lon, o.lat],
                        target: [end_lon, end_lat],
                    })
                })
                .collect();
            layers.push(Layer::WindLines {
                width: style.wind_line_width,
                color: style.wind_color.to_array(),
                segments,
            });
        }
        LayerVariant::WindIcons => {
            let icons: Vec<WindIconPoint> = observations
                .iter()
                .filter_map(|o| {
                    let (speed, bearing) = o.wind()?;
                    Some(WindIconPoint {
                        lon: o.lon,
                        lat: o.lat,
                        angle_deg: bearing,
                        size: speed,
                    })
                })
                .collect();
            layers.push(Layer::WindIcons {
                size_scale: style.icon_size_scale,
                color: style.wind_color.to_array(),
                icons,
            });
        }
        LayerVariant::WindGlyphs => {
            let glyphs: Vec<WindGlyphPoint> = observations
                .iter()
                .filter_map(|o| {
                    let (speed, bearing) = o.wind()?;
                    let arrow = arrow_for_bearing(bearing)?;
                    Some(WindGlyphPoint {
                        lon: o.lon,
                        lat: o.lat,
                        text: arrow.to_string(),
                        size: style.glyph_size(speed),
                    })
                })
                .collect();
            layers.push(Layer::WindGlyphs {
                color: style.wind_color.to_array(),
                glyphs,
            });
        }
        LayerVariant::WindField => {
            let arrows: Vec<QuiverArrow> = observations
                .iter()
                .filter_map(|o| {
                    let (speed, bearing) = o.wind()?;
                    let (u, v) = cartesian_components(speed, bearing);
                    Some(QuiverArrow {
                        x: o.lon,
                        y: o.lat,
                        u,
                        v,
                    })
                })
                .collect();
            layers.push(Layer::WindField {
                scale_divisor: style.quiver_scale_divisor,
                arrows,
            });
        }
    }

    debug!(
        variant = %variant,
        observations = observations.len(),
        layers = layers.len(),
        "built layer stack"
    );

    LayerStack { view, layers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn observations() -> Vec<Observation> {
        let date = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        vec![
            Observation::new(47.60, 13.00, date, 0.72, 0.30, 0.50).with_wind(10.0, 90.0),
            Observation::new(47.62, 13.02, date, 0.50, 0.25, 0.40).with_wind(4.0, 0.0),
            // No wind reading on this one.
            Observation::new(47.64, 13.04, date, 0.20, 0.10, 0.15),
        ]
    }

    #[test]
    fn test_markers_always_present() {
        let style = RenderStyle::default();
        for &variant in LayerVariant::all() {
            let stack = build_layers(&observations(), variant, &style);
            match &stack.layers[0] {
                Layer::Scatter { points, radius_m } => {
                    assert_eq!(points.len(), 3);
                    assert!((radius_m - 200.0).abs() < f64::EPSILON);
                    assert_eq!(points[0].color, [0, 128, 0, 255]);
                    assert_eq!(points[1].color, [255, 165, 0, 255]);
                    assert_eq!(points[2].color, [255, 0, 0, 255]);
                }
                other => panic!("expected scatter layer first, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_wind_lines_endpoints() {
        let style = RenderStyle::default();
        let stack = build_layers(&observations(), LayerVariant::WindLines, &style);
        assert_eq!(stack.layers.len(), 2);
        match &stack.layers[1] {
            Layer::WindLines { segments, color, .. } => {
                // The windless observation contributes no segment.
                assert_eq!(segments.len(), 2);
                assert_eq!(*color, [0, 0, 255, 255]);
                // Bearing 90° at 10 m/s and scale 0.0005: pure +lon.
                assert!((segments[0].target[0] - 13.005).abs() < 1e-9);
                assert!((segments[0].target[1] - 47.60).abs() < 1e-6);
            }
            other => panic!("expected wind lines, got {:?}", other),
        }
    }

    #[test]
    fn test_wind_icons_carry_raw_bearing() {
        let style = RenderStyle::default();
        let stack = build_layers(&observations(), LayerVariant::WindIcons, &style);
        match &stack.layers[1] {
            Layer::WindIcons { icons, size_scale, .. } => {
                assert_eq!(icons.len(), 2);
                assert!((icons[0].angle_deg - 90.0).abs() < f64::EPSILON);
                assert!((icons[0].size - 10.0).abs() < f64::EPSILON);
                assert!((size_scale - 200.0).abs() < f64::EPSILON);
            }
            other => panic!("expected wind icons, got {:?}", other),
        }
    }

    #[test]
    fn test_wind_glyphs() {
        let style = RenderStyle::default();
        let stack = build_layers(&observations(), LayerVariant::WindGlyphs, &style);
        match &stack.layers[1] {
            Layer::WindGlyphs { glyphs, .. } => {
                assert_eq!(glyphs.len(), 2);
                assert_eq!(glyphs[0].text, "→");
                assert_eq!(glyphs[1].text, "↑");
                assert!((glyphs[0].size - 30.0).abs() < f64::EPSILON);
            }
            other => panic!("expected wind glyphs, got {:?}", other),
        }
    }

    #[test]
    fn test_wind_field_components() {
        let style = RenderStyle::default();
        let stack = build_layers(&observations(), LayerVariant::WindField, &style);
        match &stack.layers[1] {
            Layer::WindField { arrows, scale_divisor } => {
                assert_eq!(arrows.len(), 2);
                // Math-angle convention: bearing 90° puts the speed on v.
                assert!(arrows[0].u.abs() < 1e-9);
                assert!((arrows[0].v - 10.0).abs() < 1e-9);
                assert!((scale_divisor - 10.0).abs() < f64::EPSILON);
            }
            other => panic!("expected wind field, got {:?}", other),
        }
    }

    #[test]
    fn test_view_centers_on_mean() {
        let style = RenderStyle::default();
        let stack = build_layers(&observations(), LayerVariant::Markers, &style);
        assert!((stack.view.latitude - 47.62).abs() < 1e-9);
        assert!((stack.view.longitude - 13.02).abs() < 1e-9);
        assert!((stack.view.zoom - 12.0).abs() < f64::EPSILON);
        assert!((stack.view.pitch - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_slice_view_falls_back_to_default_aoi() {
        let view = ViewState::for_observations(&[], 12.0);
        assert!((view.longitude - 13.0).abs() < 1e-9);
        assert!((view.latitude - 47.6).abs() < 1e-9);
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!(LayerVariant::parse("markers").unwrap(), LayerVariant::Markers);
        assert_eq!(
            LayerVariant::parse("WIND_LINES").unwrap(),
            LayerVariant::WindLines
        );
        assert!(matches!(
            LayerVariant::parse("heatmap"),
            Err(DashboardError::UnknownVariant(_))
        ));
    }

    #[test]
    fn test_layer_stack_serializes() {
        let style = RenderStyle::default();
        let stack = build_layers(&observations(), LayerVariant::WindLines, &style);
        let json = serde_json::to_value(&stack).unwrap();
        assert_eq!(json["layers"][0]["type"], "scatter");
        assert_eq!(json["layers"][1]["type"], "wind_lines");
    }
}
