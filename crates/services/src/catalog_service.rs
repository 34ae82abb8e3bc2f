use std::sync::Arc;

use atelier_core::model::{Catalog, Category, Course, CourseId, FilterState, Track, TrackSelector};
use atelier_core::query::{self, CatalogPage, Pager};
use storage::repository::CoursePrefsRepository;

use crate::error::CatalogServiceError;

/// Catalog browsing state for one session: the course list, the durable
/// filter, and the render pager.
///
/// Reads are synchronous and pure; filter mutations write through to the
/// course-preferences partition so the selection survives restarts.
pub struct CatalogService {
    catalog: Catalog,
    filter: FilterState,
    pager: Pager,
    prefs: Arc<dyn CoursePrefsRepository>,
}

impl CatalogService {
    /// Build the service, restoring any persisted filter state.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the preferences partition
    /// cannot be read.
    pub async fn hydrate(
        catalog: Catalog,
        prefs: Arc<dyn CoursePrefsRepository>,
    ) -> Result<Self, CatalogServiceError> {
        let filter = prefs.load_filter().await?.unwrap_or_default();
        Ok(Self {
            catalog,
            filter,
            pager: Pager::new(),
            prefs,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The filtered catalog subset, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Course> {
        query::visible_courses(&self.catalog, &self.filter)
    }

    /// The filtered subset capped at the pager's current size.
    #[must_use]
    pub fn page(&self) -> CatalogPage<'_> {
        query::page(&self.catalog, &self.filter, &self.pager)
    }

    /// Grow the render cap by one page.
    pub fn load_more(&mut self) {
        let total = query::visible_courses(&self.catalog, &self.filter).len();
        self.pager.load_more(total);
    }

    /// Enrolled courses for a student's track, in catalog order.
    #[must_use]
    pub fn enrolled_for(&self, track: Track) -> Vec<&Course> {
        query::enrolled_for_track(&self.catalog, track)
    }

    /// Switch the track selector and persist the filter.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if persistence fails.
    pub async fn set_track_selector(
        &mut self,
        selector: TrackSelector,
    ) -> Result<(), CatalogServiceError> {
        self.filter.set_track_selector(selector);
        self.persist().await
    }

    /// Toggle a category and persist the filter.
    ///
    /// Returns whether the category is active after the call.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if persistence fails.
    pub async fn toggle_category(
        &mut self,
        category: Category,
    ) -> Result<bool, CatalogServiceError> {
        let active = self.filter.toggle_category(category);
        self.persist().await?;
        Ok(active)
    }

    /// Replace the search text and persist the filter.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if persistence fails.
    pub async fn set_search_text(
        &mut self,
        text: impl Into<String> + Send,
    ) -> Result<(), CatalogServiceError> {
        self.filter.set_search_text(text);
        self.persist().await
    }

    /// Set a course's completed-lesson count, clamped to its lesson count.
    ///
    /// Unknown ids are ignored (returns false). The catalog is in-memory
    /// state; progress is not persisted, matching the mocked tracker.
    pub fn update_progress(&mut self, id: &CourseId, completed: u32) -> bool {
        self.catalog.update_progress(id, completed)
    }

    async fn persist(&self) -> Result<(), CatalogServiceError> {
        self.prefs.save_filter(&self.filter).await?;
        Ok(())
    }
}
