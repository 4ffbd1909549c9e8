//! Time-scale and reference-frame plumbing.
//!
//! Everything here works in radians; callers convert to degrees at the
//! provider boundary. Formulas follow Meeus, "Astronomical Algorithms"
//! (chapters 7, 12, 13, 22 and 40), with the sidereal-time and horizontal
//! conversions delegated to the `astro` crate.

use std::f64::consts::PI;

use astro::angle::{anglr_sepr, limit_to_two_PI};
use astro::coords::{alt_frm_eq, az_frm_eq};
use astro::time::{julian_day, mn_sidr, CalType, Date};
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Earth's equatorial radius, for lunar parallax.
const EARTH_RADIUS_KM: f64 = 6378.14;

/// Julian day of a UTC instant, including the day fraction.
pub(crate) fn julian_day_utc(t: DateTime<Utc>) -> f64 {
    let date = Date {
        year: t.year() as i16,
        month: t.month() as u8,
        decimal_day: t.day() as f64
            + t.hour() as f64 / 24.0
            + t.minute() as f64 / 1440.0
            + t.second() as f64 / 86400.0
            + t.nanosecond() as f64 / (86400.0 * 1e9),
        cal_type: CalType::Gregorian,
    };
    julian_day(&date)
}

/// Greenwich mean sidereal time at a UTC instant, in radians.
pub(crate) fn gmst_rad(t: DateTime<Utc>) -> f64 {
    // Sidereal time at 0h UT for the calendar date, then the day fraction
    // scaled by the sidereal/solar rate ratio.
    let date = Date {
        year: t.year() as i16,
        month: t.month() as u8,
        decimal_day: t.day() as f64,
        cal_type: CalType::Gregorian,
    };
    let jd_midnight = julian_day(&date);

    let utc_hours = t.num_seconds_from_midnight() as f64 / 3600.0;
    let gmst_hours = mn_sidr(jd_midnight).to_degrees() / 15.0 + utc_hours * 1.00273790935;

    limit_to_two_PI((gmst_hours * 15.0).to_radians())
}

/// Local mean sidereal time in radians for an east-positive longitude.
pub(crate) fn lmst_rad(t: DateTime<Utc>, longitude_rad: f64) -> f64 {
    limit_to_two_PI(gmst_rad(t) + longitude_rad)
}

/// Mean obliquity of the ecliptic, in radians (Meeus eq. 22.2, truncated).
pub(crate) fn mean_obliquity_rad(jd: f64) -> f64 {
    let t = (jd - 2451545.0) / 36525.0;
    (23.439291 - 0.0130042 * t - 1.64e-7 * t * t + 5.04e-7 * t * t * t).to_radians()
}

/// Ecliptic to equatorial coordinates (Meeus eq. 13.3 / 13.4).
///
/// Input and output in radians; returned right ascension is in [0, 2π).
pub(crate) fn ecliptic_to_equatorial(
    lon_rad: f64,
    lat_rad: f64,
    obliquity_rad: f64,
) -> (f64, f64) {
    let (sin_lon, cos_lon) = lon_rad.sin_cos();
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let (sin_eps, cos_eps) = obliquity_rad.sin_cos();

    let ra = (sin_lon * cos_eps - sin_lat / cos_lat * sin_eps).atan2(cos_lon);
    let dec = (sin_lat * cos_eps + cos_lat * sin_eps * sin_lon).asin();

    (limit_to_two_PI(ra), dec)
}

/// Equatorial coordinates to topocentric horizontal coordinates.
///
/// Returns (altitude, azimuth) in radians, azimuth clockwise from north.
pub(crate) fn altitude_azimuth(
    ra_rad: f64,
    dec_rad: f64,
    latitude_rad: f64,
    longitude_rad: f64,
    t: DateTime<Utc>,
) -> (f64, f64) {
    let hour_angle = lmst_rad(t, longitude_rad) - ra_rad;

    let alt = alt_frm_eq(hour_angle, dec_rad, latitude_rad);
    // az_frm_eq measures from south; shift to the from-north convention.
    let az = limit_to_two_PI(az_frm_eq(hour_angle, dec_rad, latitude_rad) + PI);

    (alt, az)
}

/// Angular separation between two directions on the same sphere, in radians.
///
/// Works for any spherical frame; the visibility pipeline feeds it
/// (azimuth, altitude) pairs as seen by the observer.
pub(crate) fn separation_rad(lon_a: f64, lat_a: f64, lon_b: f64, lat_b: f64) -> f64 {
    anglr_sepr(lon_a, lat_a, lon_b, lat_b)
}

/// Shift geocentric equatorial coordinates to topocentric for a nearby body
/// (Meeus ch. 40, spherical Earth, sea-level observer).
///
/// Only the Moon is close enough for this to matter at the precision the
/// visibility rules operate on (~1 degree of parallax).
pub(crate) fn topocentric_parallax(
    ra_rad: f64,
    dec_rad: f64,
    distance_km: f64,
    latitude_rad: f64,
    lmst: f64,
) -> (f64, f64) {
    let rho_sin_phi = latitude_rad.sin();
    let rho_cos_phi = latitude_rad.cos();

    // Equatorial horizontal parallax (Meeus eq. 40.1).
    let sin_pi = EARTH_RADIUS_KM / distance_km;

    let hour_angle = lmst - ra_rad;
    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_dec, cos_dec) = dec_rad.sin_cos();

    // Meeus eq. 40.2 / 40.3.
    let delta_ra = (-rho_cos_phi * sin_pi * sin_h).atan2(cos_dec - rho_cos_phi * sin_pi * cos_h);
    let dec_topo = ((sin_dec - rho_sin_phi * sin_pi) * delta_ra.cos())
        .atan2(cos_dec - rho_cos_phi * sin_pi * cos_h);

    (limit_to_two_PI(ra_rad + delta_ra), dec_topo)
}
