//! # Solar Phase
//!
//! Position of a calendar date within a solstice-anchored phase cycle, with a
//! few dashboard-grade solar figures for a fixed site, served as a small
//! JSON/HTML status display.
//!
//! ## The phase cycle
//!
//! Each year alternates 42-day **Hard** periods centered on the June 21 and
//! December 21 solstices with **Transit** periods between them. Hard periods
//! are split into six named weeks (`Pre-Low` .. `Post-Low`); Transits are
//! either six fixed weeks or a variable span that fills the gap up to the next
//! Hard period, which absorbs leap days.
//!
//! ## Architecture
//!
//! - [`models`]: calendar arithmetic, solstice anchors, phase types
//! - [`services`]: cycle construction and resolution, solstice counters,
//!   solar approximation, the merged dashboard snapshot
//! - [`config`]: TOML file plus environment overrides
//! - [`http`]: axum router, handlers and the status page
//!
//! ```
//! use chrono::NaiveDate;
//! use solar_phase::models::{SegmentKind, WeekLabel};
//! use solar_phase::services::phase_at;
//!
//! let phase = phase_at(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()).unwrap();
//! assert_eq!(phase.segment_kind, SegmentKind::HardSummer);
//! assert_eq!(phase.week_label, Some(WeekLabel::PreLow));
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{CoreError, CoreResult};
