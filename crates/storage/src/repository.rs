use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use atelier_core::model::{CourseId, FilterState, Track};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// The student-preferences partition: which cohort the student selected.
///
/// Independent of the course-preferences partition; both survive restarts.
#[async_trait]
pub trait StudentPrefsRepository: Send + Sync {
    /// Fetch the persisted track selection, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the partition cannot be read.
    async fn load_track(&self) -> Result<Option<Track>, StorageError>;

    /// Persist the track selection, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the partition cannot be written.
    async fn save_track(&self, track: Track) -> Result<(), StorageError>;
}

/// The course-preferences partition: catalog filter and wishlist.
#[async_trait]
pub trait CoursePrefsRepository: Send + Sync {
    /// Fetch the persisted filter state, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the partition cannot be read.
    async fn load_filter(&self) -> Result<Option<FilterState>, StorageError>;

    /// Persist the filter state, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the partition cannot be written.
    async fn save_filter(&self, filter: &FilterState) -> Result<(), StorageError>;

    /// Fetch the wishlisted course ids. No ordering is guaranteed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the partition cannot be read.
    async fn load_wishlist(&self) -> Result<Vec<CourseId>, StorageError>;

    /// Insert a course id into the wishlist. Set semantics: inserting an
    /// id that is already present is a no-op, never a duplicate.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the partition cannot be written.
    async fn add_wishlist(&self, id: &CourseId) -> Result<(), StorageError>;

    /// Remove a course id from the wishlist; an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the partition cannot be written.
    async fn remove_wishlist(&self, id: &CourseId) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    track: Arc<Mutex<Option<Track>>>,
    filter: Arc<Mutex<Option<FilterState>>>,
    wishlist: Arc<Mutex<HashSet<CourseId>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentPrefsRepository for InMemoryRepository {
    async fn load_track(&self) -> Result<Option<Track>, StorageError> {
        let guard = self
            .track
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }

    async fn save_track(&self, track: Track) -> Result<(), StorageError> {
        let mut guard = self
            .track
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(track);
        Ok(())
    }
}

#[async_trait]
impl CoursePrefsRepository for InMemoryRepository {
    async fn load_filter(&self) -> Result<Option<FilterState>, StorageError> {
        let guard = self
            .filter
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_filter(&self, filter: &FilterState) -> Result<(), StorageError> {
        let mut guard = self
            .filter
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(filter.clone());
        Ok(())
    }

    async fn load_wishlist(&self) -> Result<Vec<CourseId>, StorageError> {
        let guard = self
            .wishlist
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.iter().cloned().collect())
    }

    async fn add_wishlist(&self, id: &CourseId) -> Result<(), StorageError> {
        let mut guard = self
            .wishlist
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(id.clone());
        Ok(())
    }

    async fn remove_wishlist(&self, id: &CourseId) -> Result<(), StorageError> {
        let mut guard = self
            .wishlist
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(id);
        Ok(())
    }
}

/// Aggregates both preference partitions behind trait objects for easy
/// backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub student_prefs: Arc<dyn StudentPrefsRepository>,
    pub course_prefs: Arc<dyn CoursePrefsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let student_prefs: Arc<dyn StudentPrefsRepository> = Arc::new(repo.clone());
        let course_prefs: Arc<dyn CoursePrefsRepository> = Arc::new(repo);
        Self {
            student_prefs,
            course_prefs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::model::{Category, TrackSelector, Year};

    fn id(raw: &str) -> CourseId {
        CourseId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn filter_round_trips() {
        let repo = InMemoryRepository::new();
        assert!(repo.load_filter().await.unwrap().is_none());

        let mut filter = FilterState::default();
        filter.set_track_selector(TrackSelector::Year(Year::new(2).unwrap()));
        filter.toggle_category(Category::Workshop);
        filter.set_search_text("studio");

        repo.save_filter(&filter).await.unwrap();
        assert_eq!(repo.load_filter().await.unwrap(), Some(filter));
    }

    #[tokio::test]
    async fn wishlist_has_set_semantics() {
        let repo = InMemoryRepository::new();

        repo.add_wishlist(&id("nata-1")).await.unwrap();
        repo.add_wishlist(&id("nata-1")).await.unwrap();
        assert_eq!(repo.load_wishlist().await.unwrap().len(), 1);

        // Removing an absent id is a no-op, not an error.
        repo.remove_wishlist(&id("ghost")).await.unwrap();
        repo.remove_wishlist(&id("nata-1")).await.unwrap();
        assert!(repo.load_wishlist().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn track_round_trips() {
        let repo = InMemoryRepository::new();
        assert!(repo.load_track().await.unwrap().is_none());

        repo.save_track(Track::ExamPrep).await.unwrap();
        assert_eq!(repo.load_track().await.unwrap(), Some(Track::ExamPrep));

        let year4 = Track::Year(Year::new(4).unwrap());
        repo.save_track(year4).await.unwrap();
        assert_eq!(repo.load_track().await.unwrap(), Some(year4));
    }
}
