//! Phase cycle construction and resolution.
//!
//! A cycle is keyed by its *winter year*: the year whose December 21 anchors
//! the opening Hard Winter period. It runs up to the day before the next Hard
//! Winter, so consecutive cycles tile the calendar with no gap.
//!
//! ```text
//!  winter(wy)                    summer(wy+1)                     winter(wy+1)
//!      |                              |                               |
//!  [HardW][T1a][T2a][T1b][T2b~][HardS][T1a][T2a][T1b][T2b~][HardW ... next cycle
//! ```
//!
//! `~` marks the variable segments that absorb whatever days remain before the
//! next Hard period.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use log::error;

use crate::error::{CoreError, CoreResult};
use crate::models::{
    add_days, days_between, hard_window, summer_solstice, validate_date, winter_solstice,
    Category, PhaseResult, PhaseSegment, SegmentKind, WeekLabel, DAYS_PER_WEEK,
    FIXED_TRANSIT_DAYS,
};

/// Source of resolved cycles, keyed by winter year.
pub trait CycleSource: Send + Sync {
    fn cycle(&self, winter_year: i32) -> CoreResult<Arc<[PhaseSegment]>>;
}

/// Builds every cycle on demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreshCycles;

impl CycleSource for FreshCycles {
    fn cycle(&self, winter_year: i32) -> CoreResult<Arc<[PhaseSegment]>> {
        build_cycle(winter_year).map(Arc::from)
    }
}

/// Appends segments one after another, each starting the day after the previous end.
struct CycleBuilder {
    segments: Vec<PhaseSegment>,
    cursor: NaiveDate,
}

impl CycleBuilder {
    fn starting_at(cursor: NaiveDate) -> Self {
        Self {
            segments: Vec::with_capacity(SegmentKind::CYCLE_ORDER.len()),
            cursor,
        }
    }

    fn fixed(&mut self, kind: SegmentKind, days: i64) -> CoreResult<()> {
        let end = add_days(self.cursor, days - 1)?;
        self.push(kind, end)
    }

    /// Fill up to (excluding) `next_start`. Empty fills are skipped.
    fn until(&mut self, kind: SegmentKind, next_start: NaiveDate) -> CoreResult<()> {
        if next_start <= self.cursor {
            return Ok(());
        }
        let end = add_days(next_start, -1)?;
        self.push(kind, end)
    }

    fn push(&mut self, kind: SegmentKind, end: NaiveDate) -> CoreResult<()> {
        self.segments.push(PhaseSegment::new(kind, self.cursor, end));
        self.cursor = add_days(end, 1)?;
        Ok(())
    }

    fn finish(self) -> Vec<PhaseSegment> {
        self.segments
    }
}

/// Resolve the ten segments of the cycle opened by `winter_solstice(winter_year)`.
pub fn build_cycle(winter_year: i32) -> CoreResult<Vec<PhaseSegment>> {
    let (winter_start, winter_end) = hard_window(winter_solstice(winter_year)?)?;
    let (summer_start, summer_end) = hard_window(summer_solstice(winter_year + 1)?)?;
    let (next_winter_start, _) = hard_window(winter_solstice(winter_year + 1)?)?;

    let mut b = CycleBuilder::starting_at(winter_start);
    b.push(SegmentKind::HardWinter, winter_end)?;
    b.fixed(SegmentKind::Transit1AfterWinterHard, FIXED_TRANSIT_DAYS)?;
    b.fixed(SegmentKind::Transit2AfterWinterHard, FIXED_TRANSIT_DAYS)?;
    b.fixed(SegmentKind::Transit1BeforeSummerHard, FIXED_TRANSIT_DAYS)?;
    b.until(SegmentKind::Transit2BeforeSummerHard, summer_start)?;

    // Hard periods sit on their solstice, not on the previous segment's end.
    b.cursor = summer_start;
    b.push(SegmentKind::HardSummer, summer_end)?;
    b.fixed(SegmentKind::Transit1AfterSummerHard, FIXED_TRANSIT_DAYS)?;
    b.fixed(SegmentKind::Transit2AfterSummerHard, FIXED_TRANSIT_DAYS)?;
    b.fixed(SegmentKind::Transit1BeforeWinterHard, FIXED_TRANSIT_DAYS)?;
    b.until(SegmentKind::Transit2BeforeWinterHard, next_winter_start)?;

    Ok(b.finish())
}

/// Segments of the two consecutive cycles that bracket any date of `year`.
///
/// Covers the Hard windows of `winter(year-1)`, `summer(year)`, `winter(year)`
/// and `summer(year+1)`, from Nov 30 of `year - 1` to Nov 29 of `year + 1`.
pub fn resolve_window(source: &dyn CycleSource, year: i32) -> CoreResult<Vec<PhaseSegment>> {
    let mut segments = source.cycle(year - 1)?.to_vec();
    segments.extend_from_slice(&source.cycle(year)?);
    Ok(segments)
}

/// The unique segment containing `date`.
pub fn resolve_segment(source: &dyn CycleSource, date: NaiveDate) -> CoreResult<PhaseSegment> {
    let date = validate_date(date)?;
    let window = resolve_window(source, date.year())?;
    let mut matches = window.iter().filter(|s| s.contains(date));

    match (matches.next(), matches.next()) {
        (Some(segment), None) => Ok(segment.clone()),
        _ => {
            let count = window.iter().filter(|s| s.contains(date)).count();
            error!(
                "segment resolution invariant violated: date={} matches={} segments={:?}",
                date, count, window
            );
            Err(CoreError::SegmentResolutionInvariantViolation {
                date,
                matches: count,
            })
        }
    }
}

/// Position of `date` inside `segment`. `date` must lie within the segment.
pub fn locate(segment: &PhaseSegment, date: NaiveDate) -> PhaseResult {
    let day_index = days_between(segment.start, date);
    let length_days = segment.length_days();

    let (week_label, progress_fraction) = match segment.category() {
        Category::Hard => {
            let week = WeekLabel::from_index((day_index / DAYS_PER_WEEK) as usize);
            let fraction = ((day_index % DAYS_PER_WEEK) + 1) as f64 / DAYS_PER_WEEK as f64;
            (week, fraction)
        }
        Category::Transit => (None, (day_index + 1) as f64 / length_days as f64),
    };

    PhaseResult {
        segment_kind: segment.kind,
        category: segment.category(),
        season: segment.season(),
        position: segment.kind.position(),
        week_label,
        day_index,
        progress_fraction,
        segment_start: segment.start,
        segment_end: segment.end,
        length_days,
    }
}

/// Resolve the phase of `date` using cycles from `source`.
pub fn phase_with(source: &dyn CycleSource, date: NaiveDate) -> CoreResult<PhaseResult> {
    let segment = resolve_segment(source, date)?;
    Ok(locate(&segment, date))
}

/// Resolve the phase of `date`, building cycles fresh.
pub fn phase_at(date: NaiveDate) -> CoreResult<PhaseResult> {
    phase_with(&FreshCycles, date)
}
