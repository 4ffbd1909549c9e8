//! In-memory location store for tests and local development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{LocationId, UserId};
use crate::models::Location;

use super::repository::{LocationRepository, NewLocation, RepositoryError, RepositoryResult};

/// HashMap-backed implementation of [`LocationRepository`].
#[derive(Debug, Default)]
pub struct LocalRepository {
    locations: RwLock<HashMap<i64, Location>>,
    next_id: AtomicI64,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            locations: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl LocationRepository for LocalRepository {
    async fn find_for_owner(
        &self,
        owner: UserId,
        id: LocationId,
    ) -> RepositoryResult<Location> {
        let locations = self.locations.read();
        locations
            .get(&id.value())
            .filter(|location| location.owner_id == owner)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn insert(&self, owner: UserId, location: NewLocation) -> RepositoryResult<Location> {
        let id = LocationId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let stored = Location {
            id,
            owner_id: owner,
            name: location.name,
            latitude: location.latitude,
            longitude: location.longitude,
            timezone: location.timezone,
            notes: location.notes,
        };
        self.locations.write().insert(id.value(), stored.clone());
        Ok(stored)
    }

    async fn list_for_owner(&self, owner: UserId) -> RepositoryResult<Vec<Location>> {
        let locations = self.locations.read();
        let mut owned: Vec<Location> = locations
            .values()
            .filter(|location| location.owner_id == owner)
            .cloned()
            .collect();
        owned.sort_by_key(|location| location.id);
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backyard() -> NewLocation {
        NewLocation {
            name: "Backyard".to_string(),
            latitude: 43.7,
            longitude: -79.4,
            timezone: Some("America/Toronto".to_string()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = LocalRepository::new();
        let owner = UserId::new(1);
        let first = repo.insert(owner, backyard()).await.unwrap();
        let second = repo.insert(owner, backyard()).await.unwrap();
        assert_eq!(first.id.value(), 1);
        assert_eq!(second.id.value(), 2);
    }

    #[tokio::test]
    async fn test_find_is_owner_scoped() {
        let repo = LocalRepository::new();
        let owner = UserId::new(1);
        let stranger = UserId::new(2);
        let stored = repo.insert(owner, backyard()).await.unwrap();

        assert_eq!(repo.find_for_owner(owner, stored.id).await.unwrap(), stored);
        assert_eq!(
            repo.find_for_owner(stranger, stored.id).await,
            Err(RepositoryError::NotFound(stored.id))
        );
    }

    #[tokio::test]
    async fn test_find_missing_id_is_not_found() {
        let repo = LocalRepository::new();
        let missing = LocationId::new(99);
        assert_eq!(
            repo.find_for_owner(UserId::new(1), missing).await,
            Err(RepositoryError::NotFound(missing))
        );
    }

    #[tokio::test]
    async fn test_list_returns_only_owned_locations() {
        let repo = LocalRepository::new();
        let owner = UserId::new(1);
        let other = UserId::new(2);
        repo.insert(owner, backyard()).await.unwrap();
        repo.insert(other, backyard()).await.unwrap();
        repo.insert(owner, backyard()).await.unwrap();

        let owned = repo.list_for_owner(owner).await.unwrap();
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|location| location.owner_id == owner));
        assert!(owned[0].id < owned[1].id);
    }
}
