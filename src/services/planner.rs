//! Request-level visibility planning.
//!
//! Resolves a stored, owner-scoped location plus the request's time fields
//! into the core pipeline's inputs: the local-time form is preferred and may
//! borrow the location's stored timezone; the absolute form is the
//! fallback; a request with neither is rejected.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::api::{LocationId, UserId, VisibleTarget};
use crate::db::{LocationRepository, RepositoryError};
use crate::ephemeris::EphemerisProvider;
use crate::models::TimeDescriptor;

use super::visibility::{compute_visible_targets, VisibilityError};

/// Time fields of a visibility request, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeQuery {
    /// Absolute instant (legacy clients).
    pub when: Option<DateTime<Utc>>,
    /// Local wall-clock string, `YYYY-MM-DDTHH:MM`.
    pub when_local: Option<String>,
    /// IANA timezone for `when_local`; falls back to the location's zone.
    pub tz: Option<String>,
}

/// Errors of the planning flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// No matching location owned by the requesting user.
    #[error("location not found")]
    LocationNotFound,
    /// Neither `when` nor `when_local` was supplied.
    #[error("provide when or when_local")]
    MissingTime,
    #[error(transparent)]
    Visibility(#[from] VisibilityError),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for PlannerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => PlannerError::LocationNotFound,
            other => PlannerError::Repository(other),
        }
    }
}

/// Rank catalog targets for one of the user's stored locations.
pub async fn visible_targets(
    repository: &dyn LocationRepository,
    ephemeris: &dyn EphemerisProvider,
    owner: UserId,
    location_id: LocationId,
    query: TimeQuery,
) -> Result<Vec<VisibleTarget>, PlannerError> {
    let location = repository.find_for_owner(owner, location_id).await?;
    debug!(%location_id, name = %location.name, "planning visibility request");

    let descriptor = if let Some(when_local) = query.when_local {
        TimeDescriptor::Local {
            when_local,
            timezone: query.tz.or_else(|| location.timezone.clone()),
        }
    } else if let Some(when) = query.when {
        TimeDescriptor::Utc(when)
    } else {
        return Err(PlannerError::MissingTime);
    };

    let observer = location.observer();
    Ok(compute_visible_targets(ephemeris, &observer, &descriptor)?)
}
