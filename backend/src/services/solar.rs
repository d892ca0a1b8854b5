//! Dashboard-grade solar approximations for the fixed site.
//!
//! Noon altitude and day length use a simple sinusoidal declination; sunrise
//! and sunset use the NOAA fractional-year series with a 90.833° zenith
//! (refraction included). Accuracy is a few minutes, which is all the
//! dashboard needs.

use std::f64::consts::PI;

use chrono::{NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::day_of_year;

/// Observer site. Longitude is east-positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicLocation {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Tz,
}

/// The dashboard's only location.
pub const ZAGREB: GeographicLocation = GeographicLocation {
    name: "Zagreb",
    latitude: 45.81,
    longitude: 15.98,
    timezone: chrono_tz::Europe::Zagreb,
};

/// Sun center 50' below the horizon: 16' semidiameter plus 34' refraction.
const SUNRISE_ZENITH_DEG: f64 = 90.833;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Approximate solar declination in degrees.
pub fn solar_declination_deg(doy: u32) -> f64 {
    23.44 * ((360.0 / 365.0) * (doy as f64 - 81.0)).to_radians().sin()
}

/// Altitude of the sun at local solar noon, rounded to 0.1°.
pub fn noon_altitude_deg(latitude: f64, declination_deg: f64) -> f64 {
    round1(90.0 - latitude + declination_deg)
}

/// Hours between sunrise and sunset of the sun's center, ignoring refraction.
pub fn daylight_hours(latitude: f64, declination_deg: f64) -> f64 {
    let cos_h = (-latitude.to_radians().tan() * declination_deg.to_radians().tan()).clamp(-1.0, 1.0);
    let h = cos_h.acos();
    (2.0 * h * 24.0) / (2.0 * PI)
}

fn fractional_year(doy: u32) -> f64 {
    2.0 * PI / 365.0 * (doy as f64 - 1.0)
}

/// Equation of time in minutes.
pub fn equation_of_time_minutes(doy: u32) -> f64 {
    let g = fractional_year(doy);
    229.18
        * (0.000075 + 0.001868 * g.cos()
            - 0.032077 * g.sin()
            - 0.014615 * (2.0 * g).cos()
            - 0.040849 * (2.0 * g).sin())
}

/// Solar declination in radians from the NOAA series.
pub fn declination_rad(doy: u32) -> f64 {
    let g = fractional_year(doy);
    0.006918 - 0.399912 * g.cos() + 0.070257 * g.sin() - 0.006758 * (2.0 * g).cos()
        + 0.000907 * (2.0 * g).sin()
        - 0.002697 * (3.0 * g).cos()
        + 0.00148 * (3.0 * g).sin()
}

/// UTC offset of `tz` in hours at local noon of `date`.
///
/// Noon is never inside a DST gap or fold, so the lookup is unambiguous.
pub fn utc_offset_hours(tz: Tz, date: NaiveDate) -> f64 {
    let Some(noon) = date.and_hms_opt(12, 0, 0) else {
        return 0.0;
    };
    tz.from_local_datetime(&noon)
        .earliest()
        .map(|dt| dt.offset().fix().local_minus_utc() as f64 / 3600.0)
        .unwrap_or(0.0)
}

/// Local clock minutes after midnight of `(sunrise, sunset)`, unwrapped.
pub fn sunrise_sunset_minutes(date: NaiveDate, location: &GeographicLocation) -> (f64, f64) {
    let doy = day_of_year(date);
    let lat = location.latitude.to_radians();
    let dec = declination_rad(doy);
    let eqt = equation_of_time_minutes(doy);

    let zenith = SUNRISE_ZENITH_DEG.to_radians();
    let cos_ha = ((zenith.cos() - lat.sin() * dec.sin()) / (lat.cos() * dec.cos())).clamp(-1.0, 1.0);
    let ha_deg = cos_ha.acos().to_degrees();

    let tz_hours = utc_offset_hours(location.timezone, date);
    let solar_noon = 720.0 - 4.0 * location.longitude - eqt + 60.0 * tz_hours;
    (solar_noon - 4.0 * ha_deg, solar_noon + 4.0 * ha_deg)
}

/// `HH:MM` for minutes after midnight, wrapped into one day.
pub fn format_clock(minutes: f64) -> String {
    let minutes = minutes.rem_euclid(MINUTES_PER_DAY);
    let mut hh = (minutes / 60.0).floor() as u32;
    let mut mm = (minutes % 60.0).round() as u32;
    if mm == 60 {
        hh = (hh + 1) % 24;
        mm = 0;
    }
    format!("{hh:02}:{mm:02}")
}

/// `15 h 32 min` style duration.
pub fn format_duration_hours(hours: f64) -> String {
    let mut hh = hours.trunc() as u32;
    let mut mm = ((hours - hours.trunc()) * 60.0).round() as u32;
    if mm == 60 {
        hh = (hh + 1) % 24;
        mm = 0;
    }
    format!("{hh} h {mm:02} min")
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Everything the dashboard shows about the sun for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSnapshot {
    pub declination_deg: f64,
    pub noon_altitude_deg: f64,
    pub daylight_hours: f64,
    pub sun_up: String,
    pub sunrise: String,
    pub sunset: String,
    pub utc_offset_hours: f64,
}

pub fn solar_snapshot(date: NaiveDate, location: &GeographicLocation) -> SolarSnapshot {
    let declination = solar_declination_deg(day_of_year(date));
    let hours = daylight_hours(location.latitude, declination);
    let (rise, set) = sunrise_sunset_minutes(date, location);

    SolarSnapshot {
        declination_deg: declination,
        noon_altitude_deg: noon_altitude_deg(location.latitude, declination),
        daylight_hours: hours,
        sun_up: format_duration_hours(hours),
        sunrise: format_clock(rise),
        sunset: format_clock(set),
        utc_offset_hours: utc_offset_hours(location.timezone, date),
    }
}
