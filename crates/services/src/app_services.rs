use std::sync::Arc;

use atelier_core::Clock;
use atelier_core::model::{Catalog, Track};
use storage::repository::Storage;

use crate::assignment_service::AssignmentService;
use crate::auth_service::AuthService;
use crate::catalog_service::CatalogService;
use crate::delay::NetworkDelay;
use crate::error::AppServicesError;
use crate::recommendation::{CharSumRecommender, RecommendationService, Recommender};
use crate::wishlist_service::WishlistService;

/// The application context: every service the presentation layer talks to,
/// assembled over one `Storage` with one clock and one simulated delay.
///
/// There is no process-wide singleton; constructing two `AppServices` over
/// independent storages yields fully isolated instances, which is what the
/// tests do.
pub struct AppServices {
    catalog: CatalogService,
    wishlist: WishlistService,
    auth: AuthService,
    recommendations: Arc<RecommendationService>,
    assignments: AssignmentService,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or hydration
    /// fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        delay: NetworkDelay,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::with_storage(storage, clock, delay).await
    }

    /// Build services over in-memory storage; nothing survives the drop.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if hydration fails.
    pub async fn in_memory(clock: Clock, delay: NetworkDelay) -> Result<Self, AppServicesError> {
        Self::with_storage(Storage::in_memory(), clock, delay).await
    }

    /// Build services over the given storage, restoring persisted state.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if hydration fails.
    pub async fn with_storage(
        storage: Storage,
        clock: Clock,
        delay: NetworkDelay,
    ) -> Result<Self, AppServicesError> {
        let seed = Catalog::seed();
        let recommender: Arc<dyn Recommender> =
            Arc::new(CharSumRecommender::from_catalog(&seed));

        let track = storage
            .student_prefs
            .load_track()
            .await?
            .unwrap_or(Track::ExamPrep);

        let catalog = CatalogService::hydrate(seed, Arc::clone(&storage.course_prefs)).await?;
        let wishlist = WishlistService::hydrate(Arc::clone(&storage.course_prefs)).await?;
        let auth = AuthService::new(delay, Arc::clone(&storage.student_prefs));
        let recommendations = Arc::new(RecommendationService::new(recommender, delay));
        let assignments = AssignmentService::for_track(track, clock, delay);

        Ok(Self {
            catalog,
            wishlist,
            auth,
            recommendations,
            assignments,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogService {
        &mut self.catalog
    }

    #[must_use]
    pub fn wishlist(&self) -> &WishlistService {
        &self.wishlist
    }

    pub fn wishlist_mut(&mut self) -> &mut WishlistService {
        &mut self.wishlist
    }

    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthService {
        &mut self.auth
    }

    /// Shared handle so callers can spawn the expiry timer.
    #[must_use]
    pub fn recommendations(&self) -> Arc<RecommendationService> {
        Arc::clone(&self.recommendations)
    }

    #[must_use]
    pub fn assignments(&self) -> &AssignmentService {
        &self.assignments
    }

    pub fn assignments_mut(&mut self) -> &mut AssignmentService {
        &mut self.assignments
    }
}
