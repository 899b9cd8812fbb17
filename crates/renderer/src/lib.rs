//! Layer-spec rendering for forest health observations.
//!
//! This crate holds the pure per-observation pipeline: NDVI health
//! classification with fixed marker colors, wind vector transforms for
//! both map-offset and cartesian-plot conventions, compass-arrow glyph
//! bucketing, and the strategy that assembles a filtered day of
//! observations into serializable layer specs for an external map or
//! plot renderer.

pub mod classify;
pub mod glyphs;
pub mod layers;
pub mod style;
pub mod wind;

pub use classify::{classify, HealthCategory};
pub use glyphs::{arrow_for_bearing, COMPASS_ARROWS};
pub use layers::{build_layers, Layer, LayerStack, LayerVariant, ViewState};
pub use style::RenderStyle;
