//! Target-visibility orchestration.
//!
//! For one (observer, instant) pair this walks the fixed catalog, asks the
//! ephemeris provider for each body's apparent position (plus solar
//! elongation for planets), runs the rule chains and the scorer, and ranks
//! the results. The computation is pure and synchronous; any ephemeris
//! failure aborts the whole request.

use std::cmp::Ordering;

use thiserror::Error;
use tracing::debug;

use crate::api::{TargetKind, VisibleTarget};
use crate::catalog::{CatalogTarget, CATALOG};
use crate::ephemeris::{Body, EphemerisError, EphemerisProvider};
use crate::models::{GeographicLocation, TimeDescriptor, TimeError};

use super::rules::{self, RuleContext};
use super::score;

/// Errors of one visibility request.
///
/// Time variants are request errors the caller can correct; ephemeris
/// variants indicate an internal defect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisibilityError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

/// Evaluate every catalog target for `observer` at the requested time.
///
/// Results are ordered visible-first, then by descending score. The output
/// always covers the full catalog; there are no partial results.
pub fn compute_visible_targets(
    ephemeris: &dyn EphemerisProvider,
    observer: &GeographicLocation,
    when: &TimeDescriptor,
) -> Result<Vec<VisibleTarget>, VisibilityError> {
    let instant = when.resolve_utc()?;

    let sun = ephemeris.apparent_position(Body::Sun, observer, instant)?;
    let sun_altitude_deg = sun.altitude.value();
    debug!(
        %instant,
        latitude = observer.latitude,
        longitude = observer.longitude,
        sun_altitude_deg,
        "evaluating catalog"
    );

    let mut results = Vec::with_capacity(CATALOG.len());
    for target in CATALOG.iter() {
        let body = target.body();
        let position = ephemeris.apparent_position(body, observer, instant)?;

        let elongation_deg = match target {
            CatalogTarget::Planet(_) => Some(
                ephemeris
                    .separation(body, Body::Sun, observer, instant)?
                    .value(),
            ),
            _ => None,
        };

        let altitude_deg = position.altitude.value();
        let ctx = RuleContext {
            altitude_deg,
            sun_altitude_deg,
            elongation_deg,
            inner_planet: matches!(target, CatalogTarget::Planet(p) if p.is_inner()),
        };
        let verdict = rules::evaluate(target.kind(), &ctx);

        results.push(VisibleTarget {
            name: target.name().to_string(),
            kind: target.kind(),
            altitude_deg,
            azimuth_deg: position.azimuth.value(),
            sun_altitude_deg,
            elongation_deg,
            visible: verdict.visible,
            reason: verdict.reason.map(str::to_string),
            score: score::desirability(altitude_deg, sun_altitude_deg, elongation_deg, target.kind()),
        });
    }

    // Visible targets first, best score first within each group. The sort
    // is stable, so equal keys keep catalog order.
    results.sort_by(|a, b| {
        (!a.visible)
            .cmp(&!b.visible)
            .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
    });

    Ok(results)
}
