//! HTTP request handlers for the dashboard API.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use obs_common::DashboardError;
use obs_processor::{ColumnStats, ColumnSummary};
use renderer::{build_layers, LayerStack, LayerVariant};

use crate::state::AppState;

/// Error wrapper translating [`DashboardError`] into HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub DashboardError);

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    no_data: bool,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            warn!(error = %self.0, "request failed");
        }
        let body = ErrorBody {
            error: self.0.to_string(),
            no_data: matches!(self.0, DashboardError::NoData(_)),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        Self(err)
    }
}

/// Liveness probe.
pub async fn healthz_handler() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
pub struct DatesResponse {
    pub dates: Vec<NaiveDate>,
    pub count: usize,
    pub variants: Vec<String>,
}

/// List the distinct dates available in the dataset, plus the layer
/// variants a frame can be requested in.
pub async fn dates_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DatesResponse>, ApiError> {
    let dataset = state.dataset()?;
    let dates = dataset.dates();
    Ok(Json(DatesResponse {
        count: dates.len(),
        dates,
        variants: LayerVariant::all().iter().map(|v| v.to_string()).collect(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct FrameQuery {
    pub variant: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FrameResponse {
    pub date: NaiveDate,
    pub variant: String,
    pub rows: usize,
    #[serde(flatten)]
    pub stack: LayerStack,
}

fn parse_day(raw: &str) -> Result<NaiveDate, DashboardError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| DashboardError::InvalidDate(raw.to_string()))
}

/// Layer specs for one selected date.
pub async fn frame_handler(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
    Query(query): Query<FrameQuery>,
) -> Result<Json<FrameResponse>, ApiError> {
    let day = parse_day(&date)?;
    let variant = match &query.variant {
        Some(raw) => LayerVariant::parse(raw)?,
        None => LayerVariant::Markers,
    };

    let dataset = state.dataset()?;
    let frame = dataset.frame_for(day);
    if frame.is_empty() {
        return Err(DashboardError::NoData(day.to_string()).into());
    }

    let stack = build_layers(frame.observations(), variant, &state.style);
    Ok(Json(FrameResponse {
        date: day,
        variant: variant.to_string(),
        rows: frame.len(),
        stack,
    }))
}

#[derive(Debug, Serialize)]
pub struct ColumnStatsRow {
    pub column: String,
    #[serde(flatten)]
    pub stats: ColumnStats,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub date: NaiveDate,
    pub rows: usize,
    pub vegetation: Vec<ColumnStatsRow>,
    pub weather: Vec<ColumnStatsRow>,
}

/// Descriptive statistics for one selected date, split into the
/// vegetation and weather tables.
pub async fn stats_handler(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<StatsResponse>, ApiError> {
    let day = parse_day(&date)?;

    let dataset = state.dataset()?;
    let frame = dataset.frame_for(day);
    let summary = frame
        .summary()
        .ok_or_else(|| DashboardError::NoData(day.to_string()))?;

    Ok(Json(StatsResponse {
        date: day,
        rows: summary.rows,
        vegetation: stats_rows(summary.vegetation()),
        weather: stats_rows(summary.weather()),
    }))
}

fn stats_rows<'a>(columns: impl Iterator<Item = &'a ColumnSummary>) -> Vec<ColumnStatsRow> {
    columns
        .map(|c| ColumnStatsRow {
            column: c.column.header().to_string(),
            stats: c.stats,
        })
        .collect()
}
