//! The fixed catalog of evaluated targets.
//!
//! Every visibility request evaluates exactly this set: the seven major
//! planets, the Moon, and three bright deep-sky objects. The catalog is
//! process-wide constant data; swapping targets is a code change, not a
//! per-request concern.

use crate::api::TargetKind;
use crate::ephemeris::Body;

/// The major planets, each carrying its own ephemeris resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// All planets in catalog order.
    pub const ALL: [Planet; 7] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Whether the planet orbits inside Earth's orbit. Inner planets never
    /// stray far from the Sun and get an extra glare rule.
    pub fn is_inner(&self) -> bool {
        matches!(self, Planet::Mercury | Planet::Venus)
    }
}

/// A fixed-coordinate deep-sky object. Treated as stationary on the
/// celestial sphere; no proper motion or ephemeris lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeepSky {
    pub name: &'static str,
    pub ra_hours: f64,
    pub dec_deg: f64,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogTarget {
    Planet(Planet),
    Moon,
    DeepSky(DeepSky),
}

/// The literal evaluation universe: 7 planets, the Moon, 3 DSOs, in the
/// order they are reported before ranking.
pub const CATALOG: [CatalogTarget; 11] = [
    CatalogTarget::Planet(Planet::Mercury),
    CatalogTarget::Planet(Planet::Venus),
    CatalogTarget::Planet(Planet::Mars),
    CatalogTarget::Planet(Planet::Jupiter),
    CatalogTarget::Planet(Planet::Saturn),
    CatalogTarget::Planet(Planet::Uranus),
    CatalogTarget::Planet(Planet::Neptune),
    CatalogTarget::Moon,
    CatalogTarget::DeepSky(DeepSky {
        name: "Orion Nebula (M42)",
        ra_hours: 5.0 + 35.0 / 60.0,
        dec_deg: -(5.0 + 23.0 / 60.0),
    }),
    CatalogTarget::DeepSky(DeepSky {
        name: "Andromeda Galaxy (M31)",
        ra_hours: 0.0 + 42.0 / 60.0,
        dec_deg: 41.0 + 16.0 / 60.0,
    }),
    CatalogTarget::DeepSky(DeepSky {
        name: "Pleiades (M45)",
        ra_hours: 3.0 + 47.0 / 60.0,
        dec_deg: 24.0 + 7.0 / 60.0,
    }),
];

impl CatalogTarget {
    pub fn name(&self) -> &'static str {
        match self {
            CatalogTarget::Planet(p) => p.name(),
            CatalogTarget::Moon => "Moon",
            CatalogTarget::DeepSky(dso) => dso.name,
        }
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            CatalogTarget::Planet(_) => TargetKind::Planet,
            CatalogTarget::Moon => TargetKind::Moon,
            CatalogTarget::DeepSky(_) => TargetKind::Dso,
        }
    }

    /// Ephemeris body this entry resolves to.
    pub fn body(&self) -> Body {
        match self {
            CatalogTarget::Planet(p) => Body::Planet(*p),
            CatalogTarget::Moon => Body::Moon,
            CatalogTarget::DeepSky(dso) => Body::Fixed {
                ra_hours: dso.ra_hours,
                dec_deg: dso.dec_deg,
            },
        }
    }
}
