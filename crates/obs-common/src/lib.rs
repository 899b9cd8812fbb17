//! Common types and utilities shared across all forest-watch crates and services.

pub mod bbox;
pub mod color;
pub mod error;
pub mod observation;

pub use bbox::BoundingBox;
pub use color::Color;
pub use error::{DashboardError, DashboardResult};
pub use observation::{ColumnGroup, NumericColumn, Observation};
