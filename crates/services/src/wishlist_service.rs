use std::collections::HashSet;
use std::sync::Arc;

use atelier_core::model::CourseId;
use storage::repository::CoursePrefsRepository;

use crate::error::WishlistServiceError;

/// The user's wishlisted course ids, cached in memory and written through
/// to the course-preferences partition.
///
/// Membership is set-semantic: adding an id twice leaves a single entry,
/// and removing an absent id is a no-op. Lookup and count are O(1).
pub struct WishlistService {
    ids: HashSet<CourseId>,
    prefs: Arc<dyn CoursePrefsRepository>,
}

impl WishlistService {
    /// Build the service, restoring the persisted wishlist.
    ///
    /// # Errors
    ///
    /// Returns `WishlistServiceError::Storage` if the preferences partition
    /// cannot be read.
    pub async fn hydrate(
        prefs: Arc<dyn CoursePrefsRepository>,
    ) -> Result<Self, WishlistServiceError> {
        let ids = prefs.load_wishlist().await?.into_iter().collect();
        Ok(Self { ids, prefs })
    }

    /// Add a course id. Idempotent: returns false when already present.
    ///
    /// # Errors
    ///
    /// Returns `WishlistServiceError::Storage` if persistence fails.
    pub async fn add(&mut self, id: &CourseId) -> Result<bool, WishlistServiceError> {
        if !self.ids.insert(id.clone()) {
            return Ok(false);
        }
        self.prefs.add_wishlist(id).await?;
        Ok(true)
    }

    /// Remove a course id. Returns false (and persists nothing) when the
    /// id was not wishlisted.
    ///
    /// # Errors
    ///
    /// Returns `WishlistServiceError::Storage` if persistence fails.
    pub async fn remove(&mut self, id: &CourseId) -> Result<bool, WishlistServiceError> {
        if !self.ids.remove(id) {
            return Ok(false);
        }
        self.prefs.remove_wishlist(id).await?;
        Ok(true)
    }

    #[must_use]
    pub fn contains(&self, id: &CourseId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Wishlisted ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &CourseId> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    fn id(raw: &str) -> CourseId {
        CourseId::new(raw).unwrap()
    }

    async fn service_with_repo() -> (WishlistService, InMemoryRepository) {
        let repo = InMemoryRepository::new();
        let service = WishlistService::hydrate(Arc::new(repo.clone())).await.unwrap();
        (service, repo)
    }

    #[tokio::test]
    async fn add_then_contains_then_remove() {
        let (mut service, _repo) = service_with_repo().await;
        assert!(service.is_empty());

        assert!(service.add(&id("nata-1")).await.unwrap());
        assert!(service.contains(&id("nata-1")));
        assert_eq!(service.count(), 1);

        assert!(service.remove(&id("nata-1")).await.unwrap());
        assert!(!service.contains(&id("nata-1")));
        assert_eq!(service.count(), 0);
    }

    #[tokio::test]
    async fn add_is_idempotent() {
        let (mut service, repo) = service_with_repo().await;

        assert!(service.add(&id("nata-1")).await.unwrap());
        assert!(!service.add(&id("nata-1")).await.unwrap());
        assert_eq!(service.count(), 1);
        assert_eq!(repo.load_wishlist().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_of_absent_id_is_a_noop() {
        let (mut service, _repo) = service_with_repo().await;
        assert!(!service.remove(&id("ghost")).await.unwrap());
    }

    #[tokio::test]
    async fn add_remove_round_trips_membership() {
        let (mut service, _repo) = service_with_repo().await;
        service.add(&id("year2-1")).await.unwrap();

        let before: HashSet<CourseId> = service.ids().cloned().collect();
        service.add(&id("year3-1")).await.unwrap();
        service.remove(&id("year3-1")).await.unwrap();
        let after: HashSet<CourseId> = service.ids().cloned().collect();

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn hydrate_restores_persisted_ids() {
        let repo = InMemoryRepository::new();
        repo.add_wishlist(&id("nata-3")).await.unwrap();

        let service = WishlistService::hydrate(Arc::new(repo)).await.unwrap();
        assert!(service.contains(&id("nata-3")));
        assert_eq!(service.count(), 1);
    }
}
