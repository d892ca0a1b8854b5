//! Calendar arithmetic on plain dates.
//!
//! Thin helpers over [`chrono::NaiveDate`] used by the solstice resolver and
//! the phase cycle. Everything here is pure integer/date arithmetic.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{CoreError, CoreResult};

/// Earliest year accepted as query input.
pub const MIN_SUPPORTED_YEAR: i32 = 1;

/// Latest year accepted as query input. Cycle resolution reaches into year + 1.
pub const MAX_SUPPORTED_YEAR: i32 = 9999;

/// Signed number of days from `a` to `b` (`b - a`).
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// `d` shifted by `n` days (negative moves backwards).
///
/// Fails only when the result leaves chrono's representable range.
pub fn add_days(d: NaiveDate, n: i64) -> CoreResult<NaiveDate> {
    d.checked_add_signed(Duration::days(n)).ok_or_else(|| {
        CoreError::invalid_date(d.to_string(), format!("adding {n} days leaves the calendar range"))
    })
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 1-based day of year (January 1 is 1, December 31 is 365 or 366).
pub fn day_of_year(d: NaiveDate) -> u32 {
    d.ordinal()
}

/// Number of days in `year`.
pub fn days_in_year(year: i32) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Construct a date, mapping an impossible combination to [`CoreError::InvalidDate`].
pub fn ymd(year: i32, month: u32, day: u32) -> CoreResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CoreError::invalid_date(
            format!("{year:04}-{month:02}-{day:02}"),
            "no such calendar date",
        )
    })
}

/// Reject dates outside [`MIN_SUPPORTED_YEAR`]..=[`MAX_SUPPORTED_YEAR`].
pub fn validate_date(d: NaiveDate) -> CoreResult<NaiveDate> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&d.year()) {
        Ok(d)
    } else {
        Err(CoreError::invalid_date(
            d.to_string(),
            format!("year must be within {MIN_SUPPORTED_YEAR}..={MAX_SUPPORTED_YEAR}"),
        ))
    }
}

/// Parse a `YYYY-MM-DD` query value into a supported date.
pub fn parse_iso_date(input: &str) -> CoreResult<NaiveDate> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        CoreError::invalid_date(trimmed, "expected a valid YYYY-MM-DD date")
    })?;
    validate_date(date).map_err(|_| {
        CoreError::invalid_date(
            trimmed,
            format!("year must be within {MIN_SUPPORTED_YEAR}..={MAX_SUPPORTED_YEAR}"),
        )
    })
}
