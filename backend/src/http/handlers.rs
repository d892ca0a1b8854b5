//! HTTP handlers for the dashboard.
//!
//! Each handler corresponds to an endpoint and delegates to the service layer.
//! The computations are cheap and never block, so they run inline.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;
use tracing::debug;

use super::dto::{CycleResponse, DataQuery, HealthResponse, SegmentDto};
use super::error::AppError;
use super::page::render_index;
use super::state::AppState;
use crate::error::CoreError;
use crate::models::{parse_iso_date, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};
use crate::services::{build_snapshot, CycleSource, DashboardSnapshot};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Date a request evaluates: pinned date, then `?date=`, then today.
pub fn select_date(state: &AppState, query: &DataQuery) -> Result<NaiveDate, CoreError> {
    if let Some(pinned) = state.config.pinned_date {
        return Ok(pinned);
    }
    match query.date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_iso_date(raw),
        _ => Ok(state.today()),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /
///
/// The status page. It polls `/data` on the configured refresh interval.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.config.display.refresh_seconds))
}

/// GET /data?date=YYYY-MM-DD
///
/// Phase, solstice counters and solar figures for one date.
pub async fn get_data(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> HandlerResult<DashboardSnapshot> {
    let date = select_date(&state, &query)?;
    let snapshot = build_snapshot(&state.cycles, date, &state.location)?;
    debug!(%date, segment = ?snapshot.segment_kind, progress = snapshot.progress, "resolved dashboard snapshot");
    Ok(Json(snapshot))
}

// =============================================================================
// Cycle listing
// =============================================================================

/// GET /v1/cycle/{winter_year}
///
/// Resolved segments of the cycle opened by December 21 of `winter_year`.
pub async fn get_cycle(
    State(state): State<AppState>,
    Path(winter_year): Path<i32>,
) -> HandlerResult<CycleResponse> {
    if !(MIN_SUPPORTED_YEAR..MAX_SUPPORTED_YEAR).contains(&winter_year) {
        return Err(AppError::BadRequest(format!(
            "winter_year must be within {}..{}",
            MIN_SUPPORTED_YEAR, MAX_SUPPORTED_YEAR
        )));
    }

    let cycle = state.cycles.cycle(winter_year)?;
    let segments: Vec<SegmentDto> = cycle.iter().map(SegmentDto::from).collect();
    let total_days = segments.iter().map(|s| s.length_days).sum();

    Ok(Json(CycleResponse {
        winter_year,
        total_days,
        segments,
    }))
}
