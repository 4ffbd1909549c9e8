//! Service layer for business logic and orchestration.
//!
//! Services sit between the location store and the crate's callers: the
//! rule chains and scorer are pure policy, `visibility` orchestrates one
//! request against the ephemeris, and `planner` adapts stored locations and
//! raw request fields into that pipeline.

pub mod planner;
pub mod rules;
pub mod score;
pub mod visibility;

pub use planner::{visible_targets, PlannerError, TimeQuery};
pub use visibility::{compute_visible_targets, VisibilityError};
