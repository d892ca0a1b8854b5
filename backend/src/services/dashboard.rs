//! Response record for the status display.
//!
//! Merges the phase cycle, the solstice counters and the solar approximation
//! for one date, and picks the theme classes the page uses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::phase_cycle::{phase_with, CycleSource};
use super::solar::{solar_snapshot, GeographicLocation};
use super::solstice_distance::{following_solstice, solstice_distance, SolsticeDistance};
use crate::error::CoreResult;
use crate::models::{
    days_between, solstice_name, Category, PhaseResult, SegmentKind, Season, TransitPosition, WeekLabel,
};

/// Progress bar color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarTheme {
    Winter,
    Summer,
    WinterTransit,
    SummerTransit,
}

/// Page background class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    BgWinterHard,
    BgSummerHard,
    BgSummerTransit,
    BgWinterTransitAfter,
    BgWinterTransitBefore,
}

impl BarTheme {
    pub fn for_phase(phase: &PhaseResult) -> Self {
        match (phase.category, phase.season) {
            (Category::Hard, Season::Winter) => BarTheme::Winter,
            (Category::Hard, Season::Summer) => BarTheme::Summer,
            (Category::Transit, Season::Winter) => BarTheme::WinterTransit,
            (Category::Transit, Season::Summer) => BarTheme::SummerTransit,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BarTheme::Winter => "winter",
            BarTheme::Summer => "summer",
            BarTheme::WinterTransit => "winter-transit",
            BarTheme::SummerTransit => "summer-transit",
        }
    }
}

impl BackgroundTheme {
    pub fn for_phase(phase: &PhaseResult) -> Self {
        match (phase.category, phase.season, phase.position) {
            (Category::Hard, Season::Winter, _) => BackgroundTheme::BgWinterHard,
            (Category::Hard, Season::Summer, _) => BackgroundTheme::BgSummerHard,
            (Category::Transit, Season::Summer, _) => BackgroundTheme::BgSummerTransit,
            (Category::Transit, Season::Winter, Some(TransitPosition::After)) => {
                BackgroundTheme::BgWinterTransitAfter
            }
            (Category::Transit, Season::Winter, _) => BackgroundTheme::BgWinterTransitBefore,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BackgroundTheme::BgWinterHard => "bg-winter-hard",
            BackgroundTheme::BgSummerHard => "bg-summer-hard",
            BackgroundTheme::BgSummerTransit => "bg-summer-transit",
            BackgroundTheme::BgWinterTransitAfter => "bg-winter-transit-after",
            BackgroundTheme::BgWinterTransitBefore => "bg-winter-transit-before",
        }
    }
}

/// Everything `/data` returns for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Long form, e.g. `05 June 2025`.
    pub date: String,
    pub iso_date: NaiveDate,
    pub title: String,

    pub segment_kind: SegmentKind,
    pub segment_name: String,
    pub category: Category,
    pub season: Season,
    pub week_label: Option<WeekLabel>,
    pub progress_fraction: f64,
    /// Percent, one decimal.
    pub progress: f64,
    pub segment_start: NaiveDate,
    pub segment_end: NaiveDate,

    pub location: String,
    pub sun_altitude: f64,
    pub sun_up: String,
    pub daylight_hours: f64,
    pub sunrise: String,
    pub sunset: String,
    pub utc_offset_hours: f64,

    pub bar: BarTheme,
    pub bg: BackgroundTheme,

    pub days_since_last_solstice: i64,
    pub days_to_next_solstice: i64,
    pub last_solstice: NaiveDate,
    pub next_solstice: NaiveDate,
    /// Human-readable counter line.
    pub solstice: String,
}

/// Counter line: `14 days from Winter solstice · 168 days to Summer solstice`.
pub fn solstice_line(date: NaiveDate, distance: &SolsticeDistance) -> CoreResult<String> {
    if distance.is_solstice() {
        let following = following_solstice(date)?;
        let days = days_between(date, following);
        return Ok(format!(
            "{} solstice today · {} {} to {} solstice",
            distance.last_season(),
            days,
            plural_days(days),
            solstice_name(following)
        ));
    }
    Ok(format!(
        "{} {} from {} solstice · {} {} to {} solstice",
        distance.days_since_last_solstice,
        plural_days(distance.days_since_last_solstice),
        distance.last_season(),
        distance.days_to_next_solstice,
        plural_days(distance.days_to_next_solstice),
        distance.next_season()
    ))
}

fn plural_days(n: i64) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}

/// Build the full snapshot for `date` at `location`.
pub fn build_snapshot(
    source: &dyn CycleSource,
    date: NaiveDate,
    location: &GeographicLocation,
) -> CoreResult<DashboardSnapshot> {
    let phase = phase_with(source, date)?;
    let distance = solstice_distance(date)?;
    let solar = solar_snapshot(date, location);

    Ok(DashboardSnapshot {
        date: date.format("%d %B %Y").to_string(),
        iso_date: date,
        title: phase.title(),
        segment_kind: phase.segment_kind,
        segment_name: phase.segment_kind.display_name().to_string(),
        category: phase.category,
        season: phase.season,
        week_label: phase.week_label,
        progress_fraction: phase.progress_fraction,
        progress: (phase.progress_fraction * 1000.0).round() / 10.0,
        segment_start: phase.segment_start,
        segment_end: phase.segment_end,
        location: location.name.to_string(),
        sun_altitude: solar.noon_altitude_deg,
        sun_up: solar.sun_up,
        daylight_hours: solar.daylight_hours,
        sunrise: solar.sunrise,
        sunset: solar.sunset,
        utc_offset_hours: solar.utc_offset_hours,
        bar: BarTheme::for_phase(&phase),
        bg: BackgroundTheme::for_phase(&phase),
        solstice: solstice_line(date, &distance)?,
        days_since_last_solstice: distance.days_since_last_solstice,
        days_to_next_solstice: distance.days_to_next_solstice,
        last_solstice: distance.last_solstice,
        next_solstice: distance.next_solstice,
    })
}
