use chrono::NaiveDate;

use solar_phase::models::{days_between, Season};
use solar_phase::services::solstice_distance::{following_solstice, last_and_next_solstice};
use solar_phase::services::{days_since_last_solstice, days_to_next_solstice, solstice_distance};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn december_21_has_zero_days_since() {
    for year in [1999, 2000, 2024, 2025] {
        assert_eq!(days_since_last_solstice(d(year, 12, 21)).unwrap(), 0);
    }
}

#[test]
fn june_21_has_zero_days_to() {
    for year in [1999, 2000, 2024, 2025] {
        assert_eq!(days_to_next_solstice(d(year, 6, 21)).unwrap(), 0);
    }
}

#[test]
fn counters_sum_to_bracket_gap_across_leap_years() {
    for date in d(2023, 6, 1).iter_days().take_while(|x| *x <= d(2025, 1, 31)) {
        let (last, next) = last_and_next_solstice(date).unwrap();
        assert!(last <= date && date <= next);
        if last != date {
            let since = days_since_last_solstice(date).unwrap();
            let to = days_to_next_solstice(date).unwrap();
            assert_eq!(since + to, days_between(last, next), "{date}");
        }
    }
}

#[test]
fn counters_are_non_negative() {
    for date in d(2025, 1, 1).iter_days().take(365) {
        let dist = solstice_distance(date).unwrap();
        assert!(dist.days_since_last_solstice >= 0);
        assert!(dist.days_to_next_solstice >= 0);
        assert!(dist.days_since_last_solstice <= 183);
        assert!(dist.days_to_next_solstice <= 183);
    }
}

#[test]
fn bracket_gaps_depend_on_leap_day() {
    // Dec 21 -> Jun 21 spans February.
    assert_eq!(days_between(d(2023, 12, 21), d(2024, 6, 21)), 183);
    assert_eq!(days_between(d(2024, 12, 21), d(2025, 6, 21)), 182);

    let dist = solstice_distance(d(2024, 3, 1)).unwrap();
    assert_eq!(dist.days_since_last_solstice + dist.days_to_next_solstice, 183);
}

#[test]
fn following_solstice_is_strictly_after() {
    assert_eq!(following_solstice(d(2025, 6, 21)).unwrap(), d(2025, 12, 21));
    assert_eq!(following_solstice(d(2025, 12, 21)).unwrap(), d(2026, 6, 21));
    assert_eq!(following_solstice(d(2025, 12, 31)).unwrap(), d(2026, 6, 21));
}

#[test]
fn seasons_of_bracketing_anchors() {
    let dist = solstice_distance(d(2025, 9, 1)).unwrap();
    assert_eq!(dist.last_season(), Season::Summer);
    assert_eq!(dist.next_season(), Season::Winter);
}

#[test]
fn rejects_unsupported_year() {
    assert!(solstice_distance(d(10_001, 1, 1)).is_err());
}
