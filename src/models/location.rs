//! Observing-location models.

use serde::{Deserialize, Serialize};

use crate::api::{LocationId, UserId};

/// Geographic position of an observer (latitude, longitude).
///
/// Elevation is intentionally not modeled; positions are reduced to the
/// reference ellipsoid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeographicLocation {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180), positive east
    pub longitude: f64,
}

impl GeographicLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// A stored observing location, scoped to its owning user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub owner_id: UserId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone name, used as the fallback zone for local-time requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Location {
    /// Observer position of this location.
    pub fn observer(&self) -> GeographicLocation {
        GeographicLocation {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
