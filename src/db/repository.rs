//! Repository abstraction for the location store.
//!
//! The visibility core does not own persistence; it consumes location
//! records through this trait. Implementations must be `Send + Sync` so one
//! instance can be shared across concurrent requests.

use async_trait::async_trait;
use thiserror::Error;

use crate::api::{LocationId, UserId};
use crate::models::Location;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by a location store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No location with this id is owned by the requesting user.
    #[error("location {0} not found")]
    NotFound(LocationId),
    /// Backend-specific failure (connectivity, corruption, ...).
    #[error("location store failure: {0}")]
    Storage(String),
}

/// Owner-scoped access to stored observing locations.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Fetch a location by id, visible only to its owner.
    ///
    /// Returns `NotFound` both for a missing id and for a location owned by
    /// someone else; callers cannot distinguish the two.
    async fn find_for_owner(
        &self,
        owner: UserId,
        id: LocationId,
    ) -> RepositoryResult<Location>;

    /// Store a new location and return it with its assigned id.
    async fn insert(&self, owner: UserId, location: NewLocation) -> RepositoryResult<Location>;

    /// All locations owned by `owner`, in insertion order.
    async fn list_for_owner(&self, owner: UserId) -> RepositoryResult<Vec<Location>>;
}

/// Input record for creating a location.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<String>,
    pub notes: Option<String>,
}
