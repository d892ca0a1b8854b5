//! Fixed solstice anchors and the Hard-period centering rule.
//!
//! Solstices are calendar constants (June 21 and December 21), never computed
//! astronomically. Both the phase cycle and the solstice-distance counters read
//! them from here.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar::{add_days, ymd};
use crate::error::CoreResult;

pub const SUMMER_SOLSTICE_MONTH: u32 = 6;
pub const WINTER_SOLSTICE_MONTH: u32 = 12;
pub const SOLSTICE_DAY: u32 = 21;

/// Days of a Hard period that fall before its solstice.
pub const HARD_LEAD_DAYS: i64 = 21;

/// Days of a Hard period that fall after its solstice.
pub const HARD_TRAIL_DAYS: i64 = 20;

/// Which solstice a date or segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Summer,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Summer => "Summer",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two solstice dates of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolsticeAnchors {
    pub year: i32,
    pub summer: NaiveDate,
    pub winter: NaiveDate,
}

impl SolsticeAnchors {
    pub fn get(&self, season: Season) -> NaiveDate {
        match season {
            Season::Winter => self.winter,
            Season::Summer => self.summer,
        }
    }
}

pub fn summer_solstice(year: i32) -> CoreResult<NaiveDate> {
    ymd(year, SUMMER_SOLSTICE_MONTH, SOLSTICE_DAY)
}

pub fn winter_solstice(year: i32) -> CoreResult<NaiveDate> {
    ymd(year, WINTER_SOLSTICE_MONTH, SOLSTICE_DAY)
}

/// Anchors for `year`.
pub fn anchors_for(year: i32) -> CoreResult<SolsticeAnchors> {
    Ok(SolsticeAnchors {
        year,
        summer: summer_solstice(year)?,
        winter: winter_solstice(year)?,
    })
}

/// Anchors for `year - 1`, `year` and `year + 1`, oldest first.
pub fn anchor_window(year: i32) -> CoreResult<[SolsticeAnchors; 3]> {
    Ok([anchors_for(year - 1)?, anchors_for(year)?, anchors_for(year + 1)?])
}

/// All six anchors of [`anchor_window`] in chronological order.
pub fn anchor_dates_around(year: i32) -> CoreResult<[NaiveDate; 6]> {
    let [prev, cur, next] = anchor_window(year)?;
    Ok([
        prev.summer,
        prev.winter,
        cur.summer,
        cur.winter,
        next.summer,
        next.winter,
    ])
}

/// Inclusive `(start, end)` of the Hard period centered on `solstice`.
///
/// The solstice is day 22 of 42, the first day of the Post-Peak week.
pub fn hard_window(solstice: NaiveDate) -> CoreResult<(NaiveDate, NaiveDate)> {
    Ok((
        add_days(solstice, -HARD_LEAD_DAYS)?,
        add_days(solstice, HARD_TRAIL_DAYS)?,
    ))
}

/// Season of a solstice anchor. Only meaningful for June 21 / December 21.
pub fn solstice_name(anchor: NaiveDate) -> Season {
    if anchor.month() == SUMMER_SOLSTICE_MONTH {
        Season::Summer
    } else {
        Season::Winter
    }
}
