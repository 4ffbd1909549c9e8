//! Public API surface for the visibility backend.
//!
//! This file consolidates the DTO types returned at the crate boundary.
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Location identifier (store primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub i64);

/// Owning-user identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl LocationId {
    pub fn new(value: i64) -> Self {
        LocationId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a catalog target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Planet,
    Moon,
    Dso,
}

impl TargetKind {
    /// Stable wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Planet => "planet",
            TargetKind::Moon => "moon",
            TargetKind::Dso => "dso",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluated catalog target for a single (observer, instant) request.
///
/// `elongation_deg` is populated for planets only; `reason` is populated
/// exactly when `visible` is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibleTarget {
    pub name: String,
    pub kind: TargetKind,
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
    pub sun_altitude_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elongation_deg: Option<f64>,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_kind_wire_names() {
        assert_eq!(TargetKind::Planet.as_str(), "planet");
        assert_eq!(TargetKind::Moon.as_str(), "moon");
        assert_eq!(TargetKind::Dso.as_str(), "dso");
        assert_eq!(
            serde_json::to_string(&TargetKind::Dso).unwrap(),
            "\"dso\""
        );
    }

    #[test]
    fn test_visible_target_skips_absent_fields() {
        let target = VisibleTarget {
            name: "Moon".to_string(),
            kind: TargetKind::Moon,
            altitude_deg: 42.0,
            azimuth_deg: 180.0,
            sun_altitude_deg: -12.0,
            elongation_deg: None,
            visible: true,
            reason: None,
            score: 70.0,
        };
        let json = serde_json::to_value(&target).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("elongation_deg"));
        assert!(!obj.contains_key("reason"));
        assert_eq!(obj["kind"], "moon");
    }

    #[test]
    fn test_visible_target_serializes_present_fields() {
        let target = VisibleTarget {
            name: "Venus".to_string(),
            kind: TargetKind::Planet,
            altitude_deg: 20.0,
            azimuth_deg: 250.0,
            sun_altitude_deg: -15.0,
            elongation_deg: Some(10.0),
            visible: false,
            reason: Some("Too close to the Sun (glare / low elongation)".to_string()),
            score: 57.0,
        };
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["elongation_deg"], 10.0);
        assert_eq!(
            json["reason"],
            "Too close to the Sun (glare / low elongation)"
        );
    }

    #[test]
    fn test_id_newtypes_roundtrip() {
        let id = LocationId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(id.to_string(), "7");
        let user = UserId::new(3);
        assert_eq!(user.value(), 3);
    }
}
