//! Geocentric ecliptic positions of the Sun and the major planets.
//!
//! Heliocentric positions come from the VSOP87D analytic series; geocentric
//! reduction follows Meeus ch. 33 (rectangular differencing against Earth,
//! with a single light-time iteration for the planets).

use vsop87::{vsop87d, SphericalCoordinates};

use crate::catalog::Planet;

/// Light travel time across one astronomical unit, in days (Meeus eq. 33.3).
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Geocentric ecliptic-of-date position.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GeocentricEcliptic {
    pub lon_rad: f64,
    pub lat_rad: f64,
    pub distance_au: f64,
}

fn heliocentric(planet: Planet, jd: f64) -> SphericalCoordinates {
    match planet {
        Planet::Mercury => vsop87d::mercury(jd),
        Planet::Venus => vsop87d::venus(jd),
        Planet::Mars => vsop87d::mars(jd),
        Planet::Jupiter => vsop87d::jupiter(jd),
        Planet::Saturn => vsop87d::saturn(jd),
        Planet::Uranus => vsop87d::uranus(jd),
        Planet::Neptune => vsop87d::neptune(jd),
    }
}

fn rectangular(coords: &SphericalCoordinates) -> [f64; 3] {
    let (sin_l, cos_l) = coords.longitude().sin_cos();
    let (sin_b, cos_b) = coords.latitude().sin_cos();
    let r = coords.distance();
    [r * cos_b * cos_l, r * cos_b * sin_l, r * sin_b]
}

fn geocentric_from(planet_helio: &SphericalCoordinates, earth_helio: &SphericalCoordinates) -> GeocentricEcliptic {
    let p = rectangular(planet_helio);
    let e = rectangular(earth_helio);
    let (x, y, z) = (p[0] - e[0], p[1] - e[1], p[2] - e[2]);

    let distance = (x * x + y * y + z * z).sqrt();
    let lon = y.atan2(x).rem_euclid(std::f64::consts::TAU);
    let lat = (z / distance).asin();

    GeocentricEcliptic {
        lon_rad: lon,
        lat_rad: lat,
        distance_au: distance,
    }
}

/// Geocentric ecliptic position of the Sun: Earth's heliocentric position
/// flipped through the origin.
pub(crate) fn sun_position(jd: f64) -> GeocentricEcliptic {
    let earth = vsop87d::earth(jd);
    GeocentricEcliptic {
        lon_rad: (earth.longitude() + std::f64::consts::PI).rem_euclid(std::f64::consts::TAU),
        lat_rad: -earth.latitude(),
        distance_au: earth.distance(),
    }
}

/// Apparent geocentric ecliptic position of a planet.
///
/// The second evaluation antedates the planet by the light travel time of
/// the geometric distance, which is accurate to well under an arcminute for
/// all seven planets.
pub(crate) fn planet_position(planet: Planet, jd: f64) -> GeocentricEcliptic {
    let earth = vsop87d::earth(jd);
    let geometric = geocentric_from(&heliocentric(planet, jd), &earth);

    let antedated_jd = jd - LIGHT_TIME_DAYS_PER_AU * geometric.distance_au;
    geocentric_from(&heliocentric(planet, antedated_jd), &earth)
}

#[cfg(test)]
mod tests {
    use super::*;

    const J2000: f64 = 2451545.0;

    #[test]
    fn test_sun_position_at_j2000() {
        let sun = sun_position(J2000);
        // Early-January Sun: longitude near 280°, on the ecliptic, about
        // 0.983 AU away (perihelion is Jan 3).
        let lon_deg = sun.lon_rad.to_degrees();
        assert!((279.0..282.0).contains(&lon_deg), "lon = {lon_deg}");
        assert!(sun.lat_rad.to_degrees().abs() < 0.01);
        assert!((sun.distance_au - 0.9833).abs() < 0.01);
    }

    #[test]
    fn test_planet_distances_stay_in_physical_range() {
        for (planet, min_au, max_au) in [
            (Planet::Mercury, 0.5, 1.5),
            (Planet::Venus, 0.25, 1.75),
            (Planet::Mars, 0.35, 2.7),
            (Planet::Jupiter, 3.9, 6.5),
            (Planet::Saturn, 8.0, 11.1),
            (Planet::Uranus, 17.0, 21.1),
            (Planet::Neptune, 28.8, 31.3),
        ] {
            let pos = planet_position(planet, J2000);
            assert!(
                pos.distance_au > min_au && pos.distance_au < max_au,
                "{:?} at {} AU",
                planet,
                pos.distance_au
            );
            assert!(pos.lon_rad.is_finite() && pos.lat_rad.is_finite());
        }
    }

    #[test]
    fn test_planet_latitudes_stay_near_ecliptic() {
        // Geocentric ecliptic latitude of any major planet stays within
        // ~10° (an inner planet's inclination amplified by proximity).
        for planet in Planet::ALL {
            let pos = planet_position(planet, J2000 + 3000.0);
            assert!(pos.lat_rad.to_degrees().abs() < 10.0, "{planet:?}");
        }
    }

    #[test]
    fn test_light_time_shifts_position_slightly() {
        let earth = vsop87d::earth(J2000);
        let geometric = geocentric_from(&heliocentric(Planet::Jupiter, J2000), &earth);
        let apparent = planet_position(Planet::Jupiter, J2000);
        let delta_deg = (geometric.lon_rad - apparent.lon_rad).abs().to_degrees();
        assert!(delta_deg > 0.0);
        assert!(delta_deg < 0.02);
    }
}
