//! Per-kind visibility rule chains.
//!
//! Each target kind has an ordered list of (predicate, reason) rules. Rules
//! are checked in priority order and the first failing rule supplies the
//! reason; later rules are not consulted. All thresholds are policy
//! constants tuned for naked-eye / small-telescope observing, not derived
//! physics, and the comparisons are strict: a target sitting exactly on a
//! threshold passes.

use crate::api::TargetKind;

/// Inputs the rules look at for one target.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
    pub altitude_deg: f64,
    pub sun_altitude_deg: f64,
    /// Elongation from the Sun; populated for planets only.
    pub elongation_deg: Option<f64>,
    /// True for Mercury and Venus, which get an extra glare rule.
    pub inner_planet: bool,
}

/// Outcome of a rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub visible: bool,
    /// First failing rule's reason; `None` exactly when visible.
    pub reason: Option<&'static str>,
}

struct Rule {
    fails: fn(&RuleContext) -> bool,
    reason: &'static str,
}

const PLANET_RULES: &[Rule] = &[
    Rule {
        fails: |ctx| ctx.altitude_deg < 10.0,
        reason: "Too low (below 10° altitude)",
    },
    Rule {
        fails: |ctx| ctx.sun_altitude_deg > -3.0,
        reason: "Sky too bright (Sun too high)",
    },
    Rule {
        fails: |ctx| ctx.inner_planet && ctx.elongation_deg.is_some_and(|e| e < 12.0),
        reason: "Too close to the Sun (glare / low elongation)",
    },
];

// The Moon's altitude and darkness conditions share a single combined
// reason; they are deliberately not split into prioritized sub-rules.
const MOON_RULES: &[Rule] = &[Rule {
    fails: |ctx| !(ctx.altitude_deg > 5.0 && ctx.sun_altitude_deg < 0.0),
    reason: "Not up (or sky still very bright)",
}];

const DSO_RULES: &[Rule] = &[
    Rule {
        fails: |ctx| ctx.altitude_deg < 15.0,
        reason: "Too low (below 15° altitude)",
    },
    Rule {
        fails: |ctx| ctx.sun_altitude_deg > -6.0,
        reason: "Sky too bright (needs darker than civil twilight)",
    },
];

/// Evaluate the rule chain for `kind`; first failing rule wins.
pub fn evaluate(kind: TargetKind, ctx: &RuleContext) -> Verdict {
    let chain = match kind {
        TargetKind::Planet => PLANET_RULES,
        TargetKind::Moon => MOON_RULES,
        TargetKind::Dso => DSO_RULES,
    };
    for rule in chain {
        if (rule.fails)(ctx) {
            return Verdict {
                visible: false,
                reason: Some(rule.reason),
            };
        }
    }
    Verdict {
        visible: true,
        reason: None,
    }
}
