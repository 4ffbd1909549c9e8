//! Desirability scoring for ranking targets.
//!
//! The score is independent of the visibility verdict: a target can score
//! well and still be marked not visible. It only drives the ordering of the
//! result list.

use crate::api::TargetKind;

fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

/// Composite desirability of a target.
///
/// Rewards high altitude, darker skies (more negative solar altitude,
/// capped at 18° below the horizon), wider solar elongation (capped at
/// 60°), and gives planets and the Moon a flat popularity bump over DSOs.
pub fn desirability(
    altitude_deg: f64,
    sun_altitude_deg: f64,
    elongation_deg: Option<f64>,
    kind: TargetKind,
) -> f64 {
    let mut score = 0.0;
    score += clamp(altitude_deg, 0.0, 90.0) * 1.2;
    score += clamp(-sun_altitude_deg, 0.0, 18.0) * 1.0;
    if let Some(elongation) = elongation_deg {
        score += clamp(elongation, 0.0, 60.0) * 0.3;
    }
    if matches!(kind, TargetKind::Planet | TargetKind::Moon) {
        score += 5.0;
    }
    score
}
