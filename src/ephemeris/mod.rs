//! Ephemeris provider: apparent topocentric positions of catalog bodies.
//!
//! The provider is constructed once at startup, validated against the full
//! catalog, and shared read-only across requests. Consumers depend on the
//! [`EphemerisProvider`] trait so the pipeline can be exercised with a stub
//! in tests.

pub(crate) mod frames;
mod moon;
mod planets;

use chrono::{DateTime, Utc};
use qtty::Degrees;
use thiserror::Error;

use crate::catalog::{Planet, CATALOG};
use crate::models::GeographicLocation;

/// A body the ephemeris can resolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body {
    Sun,
    Moon,
    Planet(Planet),
    /// A fixed point on the celestial sphere (right ascension in hours,
    /// declination in degrees). No motion is modeled.
    Fixed { ra_hours: f64, dec_deg: f64 },
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Sun => f.write_str("Sun"),
            Body::Moon => f.write_str("Moon"),
            Body::Planet(p) => f.write_str(p.name()),
            Body::Fixed { ra_hours, dec_deg } => {
                write!(f, "fixed({ra_hours}h, {dec_deg}°)")
            }
        }
    }
}

/// Topocentric apparent position of a body for one (observer, instant) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentPosition {
    /// Altitude above the horizon.
    pub altitude: Degrees,
    /// Azimuth, clockwise from north.
    pub azimuth: Degrees,
}

/// Ephemeris failures. These indicate a defect or an unusable dataset, not
/// a correctable request; callers fail the whole request on any of them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EphemerisError {
    /// Startup validation failed; the process cannot serve requests.
    #[error("ephemeris self-check failed for {body}: {detail}")]
    Startup { body: String, detail: String },
    /// A position computation produced a non-finite value.
    #[error("ephemeris computation for {body} produced a non-finite result")]
    NonFinite { body: String },
}

/// Source of apparent topocentric positions.
///
/// Implementations must be cheap to call and free of interior mutability;
/// one instance is shared across all concurrent requests.
pub trait EphemerisProvider: Send + Sync {
    /// Apparent altitude/azimuth of `body` as seen by `observer` at `t`.
    fn apparent_position(
        &self,
        body: Body,
        observer: &GeographicLocation,
        t: DateTime<Utc>,
    ) -> Result<ApparentPosition, EphemerisError>;

    /// Angular separation between two bodies as seen by `observer` at `t`.
    fn separation(
        &self,
        a: Body,
        b: Body,
        observer: &GeographicLocation,
        t: DateTime<Utc>,
    ) -> Result<Degrees, EphemerisError>;
}

/// The production provider: VSOP87D for the Sun and planets, ELP-2000/82
/// for the Moon, direct transforms for fixed targets.
#[derive(Debug, Clone, Copy)]
pub struct Vsop87Ephemeris {
    _private: (),
}

impl Vsop87Ephemeris {
    /// Reference epoch used by the startup self-check (J2000.0).
    const SELF_CHECK_EPOCH: (i32, u32, u32) = (2000, 1, 1);

    /// Construct the provider and validate every catalog body.
    ///
    /// A failure here is fatal: the process cannot serve any visibility
    /// request with a broken ephemeris.
    pub fn new() -> Result<Self, EphemerisError> {
        let provider = Vsop87Ephemeris { _private: () };

        let (year, month, day) = Self::SELF_CHECK_EPOCH;
        let epoch = chrono::NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
            .ok_or_else(|| EphemerisError::Startup {
                body: "Sun".to_string(),
                detail: "invalid self-check epoch".to_string(),
            })?;
        let reference = GeographicLocation {
            latitude: 0.0,
            longitude: 0.0,
        };

        let mut bodies = vec![Body::Sun];
        bodies.extend(CATALOG.iter().map(|target| target.body()));
        for body in bodies {
            provider
                .apparent_position(body, &reference, epoch)
                .map_err(|e| EphemerisError::Startup {
                    body: body.to_string(),
                    detail: e.to_string(),
                })?;
        }

        Ok(provider)
    }

    /// Equatorial-of-date coordinates of `body`, in radians. Topocentric for
    /// the Moon, geocentric otherwise.
    fn equatorial(
        &self,
        body: Body,
        observer: &GeographicLocation,
        t: DateTime<Utc>,
    ) -> (f64, f64) {
        let jd = frames::julian_day_utc(t);
        match body {
            Body::Sun => {
                let sun = planets::sun_position(jd);
                frames::ecliptic_to_equatorial(
                    sun.lon_rad,
                    sun.lat_rad,
                    frames::mean_obliquity_rad(jd),
                )
            }
            Body::Planet(planet) => {
                let pos = planets::planet_position(planet, jd);
                frames::ecliptic_to_equatorial(
                    pos.lon_rad,
                    pos.lat_rad,
                    frames::mean_obliquity_rad(jd),
                )
            }
            Body::Moon => {
                let pos = moon::moon_position(jd);
                let (ra, dec) = frames::ecliptic_to_equatorial(
                    pos.lon_rad,
                    pos.lat_rad,
                    frames::mean_obliquity_rad(jd),
                );
                let lmst = frames::lmst_rad(t, observer.longitude.to_radians());
                frames::topocentric_parallax(
                    ra,
                    dec,
                    pos.distance_km,
                    observer.latitude.to_radians(),
                    lmst,
                )
            }
            Body::Fixed { ra_hours, dec_deg } => {
                ((ra_hours * 15.0).to_radians(), dec_deg.to_radians())
            }
        }
    }

    fn horizontal(
        &self,
        body: Body,
        observer: &GeographicLocation,
        t: DateTime<Utc>,
    ) -> Result<(f64, f64), EphemerisError> {
        let (ra, dec) = self.equatorial(body, observer, t);
        let (alt, az) = frames::altitude_azimuth(
            ra,
            dec,
            observer.latitude.to_radians(),
            observer.longitude.to_radians(),
            t,
        );
        if !alt.is_finite() || !az.is_finite() {
            return Err(EphemerisError::NonFinite {
                body: body.to_string(),
            });
        }
        Ok((alt, az))
    }
}

impl EphemerisProvider for Vsop87Ephemeris {
    fn apparent_position(
        &self,
        body: Body,
        observer: &GeographicLocation,
        t: DateTime<Utc>,
    ) -> Result<ApparentPosition, EphemerisError> {
        let (alt, az) = self.horizontal(body, observer, t)?;
        Ok(ApparentPosition {
            altitude: Degrees::new(alt.to_degrees()),
            azimuth: Degrees::new(az.to_degrees()),
        })
    }

    fn separation(
        &self,
        a: Body,
        b: Body,
        observer: &GeographicLocation,
        t: DateTime<Utc>,
    ) -> Result<Degrees, EphemerisError> {
        let (alt_a, az_a) = self.horizontal(a, observer, t)?;
        let (alt_b, az_b) = self.horizontal(b, observer, t)?;
        let sep = frames::separation_rad(az_a, alt_a, az_b, alt_b);
        if !sep.is_finite() {
            return Err(EphemerisError::NonFinite {
                body: a.to_string(),
            });
        }
        Ok(Degrees::new(sep.to_degrees()))
    }
}
