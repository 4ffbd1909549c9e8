//! Geocentric position of the Moon.
//!
//! Positions come from the ELP-2000/82 lunar theory as packaged by the
//! `astro` crate. The returned coordinates are geocentric ecliptic of date;
//! the provider applies topocentric parallax separately, since at lunar
//! distance it shifts the position by up to a degree.

use astro::lunar;

/// Geocentric ecliptic position of the Moon.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MoonPosition {
    pub lon_rad: f64,
    pub lat_rad: f64,
    pub distance_km: f64,
}

pub(crate) fn moon_position(jd: f64) -> MoonPosition {
    let (ecl_point, distance_km) = lunar::geocent_ecl_pos(jd);
    MoonPosition {
        lon_rad: ecl_point.long.rem_euclid(std::f64::consts::TAU),
        lat_rad: ecl_point.lat,
        distance_km,
    }
}
