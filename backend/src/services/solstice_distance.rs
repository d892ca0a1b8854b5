//! Day counters relative to the fixed June 21 / December 21 anchors.
//!
//! Independent of the phase cycle: only the calendar anchors are shared.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::models::{anchor_dates_around, days_between, solstice_name, validate_date, Season};

/// Solstice counters for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolsticeDistance {
    /// Latest anchor on or before the date.
    pub last_solstice: NaiveDate,
    /// Earliest anchor on or after the date.
    pub next_solstice: NaiveDate,
    pub days_since_last_solstice: i64,
    pub days_to_next_solstice: i64,
}

impl SolsticeDistance {
    pub fn is_solstice(&self) -> bool {
        self.days_since_last_solstice == 0
    }

    pub fn last_season(&self) -> Season {
        solstice_name(self.last_solstice)
    }

    pub fn next_season(&self) -> Season {
        solstice_name(self.next_solstice)
    }
}

/// Bracketing anchors `(last, next)` with `last <= date <= next`.
///
/// On a solstice both are the date itself.
pub fn last_and_next_solstice(date: NaiveDate) -> CoreResult<(NaiveDate, NaiveDate)> {
    let date = validate_date(date)?;
    let anchors = anchor_dates_around(date.year())?;
    // The window spans Jun 21 of year-1 to Dec 21 of year+1, so both searches hit.
    let last = anchors
        .iter()
        .rev()
        .copied()
        .find(|a| *a <= date)
        .unwrap_or(anchors[0]);
    let next = anchors
        .iter()
        .copied()
        .find(|a| *a >= date)
        .unwrap_or(anchors[5]);
    Ok((last, next))
}

/// Earliest anchor strictly after `date`.
pub fn following_solstice(date: NaiveDate) -> CoreResult<NaiveDate> {
    let date = validate_date(date)?;
    let anchors = anchor_dates_around(date.year())?;
    Ok(anchors
        .iter()
        .copied()
        .find(|a| *a > date)
        .unwrap_or(anchors[5]))
}

pub fn days_since_last_solstice(date: NaiveDate) -> CoreResult<i64> {
    let (last, _) = last_and_next_solstice(date)?;
    Ok(days_between(last, date))
}

pub fn days_to_next_solstice(date: NaiveDate) -> CoreResult<i64> {
    let (_, next) = last_and_next_solstice(date)?;
    Ok(days_between(date, next))
}

pub fn solstice_distance(date: NaiveDate) -> CoreResult<SolsticeDistance> {
    let (last, next) = last_and_next_solstice(date)?;
    Ok(SolsticeDistance {
        last_solstice: last,
        next_solstice: next,
        days_since_last_solstice: days_between(last, date),
        days_to_next_solstice: days_between(date, next),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn winter_solstice_is_zero_since() {
        assert_eq!(days_since_last_solstice(d(2025, 12, 21)).unwrap(), 0);
    }

    #[test]
    fn summer_solstice_is_zero_to() {
        assert_eq!(days_to_next_solstice(d(2025, 6, 21)).unwrap(), 0);
    }

    #[test]
    fn solstice_day_counts_both_ways_as_zero() {
        let dist = solstice_distance(d(2025, 6, 21)).unwrap();
        assert!(dist.is_solstice());
        assert_eq!(dist.days_since_last_solstice, 0);
        assert_eq!(dist.days_to_next_solstice, 0);
        assert_eq!(following_solstice(d(2025, 6, 21)).unwrap(), d(2025, 12, 21));
    }

    #[test]
    fn early_january_looks_back_across_year_end() {
        let dist = solstice_distance(d(2025, 1, 4)).unwrap();
        assert_eq!(dist.last_solstice, d(2024, 12, 21));
        assert_eq!(dist.next_solstice, d(2025, 6, 21));
        assert_eq!(dist.days_since_last_solstice, 14);
        assert_eq!(dist.days_to_next_solstice, 168);
        assert_eq!(dist.last_season(), Season::Winter);
        assert_eq!(dist.next_season(), Season::Summer);
    }

    #[test]
    fn late_december_looks_forward_across_year_end() {
        let dist = solstice_distance(d(2025, 12, 30)).unwrap();
        assert_eq!(dist.last_solstice, d(2025, 12, 21));
        assert_eq!(dist.next_solstice, d(2026, 6, 21));
    }

    #[test]
    fn counters_sum_to_bracket_gap() {
        let mut date = d(2023, 1, 1);
        while date < d(2026, 1, 1) {
            let dist = solstice_distance(date).unwrap();
            if !dist.is_solstice() {
                assert_eq!(
                    dist.days_since_last_solstice + dist.days_to_next_solstice,
                    days_between(dist.last_solstice, dist.next_solstice),
                    "{date}"
                );
                assert!(dist.days_since_last_solstice > 0);
                assert!(dist.days_to_next_solstice > 0);
            }
            date = date.succ_opt().unwrap();
        }
    }
}
