//! Data Transfer Objects for the HTTP API.
//!
//! The `/data` response is [`DashboardSnapshot`] itself; the types here cover
//! query strings and the smaller endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::services::DashboardSnapshot;
use crate::models::{Category, PhaseSegment, SegmentKind, Season};

/// Query parameters for `/data`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataQuery {
    /// `YYYY-MM-DD` override of today's date. Empty means absent.
    #[serde(default)]
    pub date: Option<String>,
}

/// One segment of a cycle listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentDto {
    pub kind: SegmentKind,
    pub name: String,
    pub category: Category,
    pub season: Season,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub length_days: i64,
    pub variable: bool,
}

impl From<&PhaseSegment> for SegmentDto {
    fn from(segment: &PhaseSegment) -> Self {
        Self {
            kind: segment.kind,
            name: segment.kind.display_name().to_string(),
            category: segment.category(),
            season: segment.season(),
            start: segment.start,
            end: segment.end,
            length_days: segment.length_days(),
            variable: segment.kind.is_variable(),
        }
    }
}

/// Response for `/v1/cycle/{winter_year}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleResponse {
    pub winter_year: i32,
    pub total_days: i64,
    pub segments: Vec<SegmentDto>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
