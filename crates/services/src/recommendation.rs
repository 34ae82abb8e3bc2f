use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use atelier_core::model::{Catalog, CourseId};

use crate::delay::NetworkDelay;

/// How many courses a recommendation highlights.
pub const HIGHLIGHT_COUNT: usize = 3;

/// How long highlights stay visible before the expiry timer clears them.
pub const DEFAULT_HIGHLIGHT_TTL: Duration = Duration::from_secs(3);

/// Maps a free-text prompt to course picks.
///
/// The stub below is cosmetic; keeping the seam here lets a real
/// recommender replace it without touching any caller.
pub trait Recommender: Send + Sync {
    /// Up to [`HIGHLIGHT_COUNT`] course ids for the prompt. Deterministic:
    /// the same prompt must produce the same ids in the same order.
    fn recommend(&self, prompt: &str) -> Vec<CourseId>;
}

/// Deterministic pseudo-recommender: the prompt's summed char codes seed a
/// repeatable shuffle of the catalog ids.
///
/// An empty prompt is defined (seed 0), not an error; callers normally
/// disable the action instead.
pub struct CharSumRecommender {
    ids: Vec<CourseId>,
}

impl CharSumRecommender {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            ids: catalog.ids().cloned().collect(),
        }
    }
}

impl Recommender for CharSumRecommender {
    fn recommend(&self, prompt: &str) -> Vec<CourseId> {
        let seed = prompt
            .chars()
            .fold(0u64, |acc, ch| acc.wrapping_add(u64::from(u32::from(ch))));

        let mut shuffled = self.ids.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        shuffled.shuffle(&mut rng);
        shuffled.truncate(HIGHLIGHT_COUNT);
        shuffled
    }
}

/// Drives the "Ask AI" flow: simulated latency, the recommender seam, and
/// the transient highlight set.
///
/// Overlapping calls are safe; the last recommendation to finish wins the
/// highlight set, and expiry clears are idempotent.
pub struct RecommendationService {
    recommender: Arc<dyn Recommender>,
    delay: NetworkDelay,
    highlight_ttl: Duration,
    highlights: Mutex<Vec<CourseId>>,
}

impl RecommendationService {
    #[must_use]
    pub fn new(recommender: Arc<dyn Recommender>, delay: NetworkDelay) -> Self {
        Self {
            recommender,
            delay,
            highlight_ttl: DEFAULT_HIGHLIGHT_TTL,
            highlights: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_highlight_ttl(mut self, ttl: Duration) -> Self {
        self.highlight_ttl = ttl;
        self
    }

    /// Resolve a recommendation after the simulated round-trip and install
    /// it as the highlight set. Always succeeds.
    pub async fn recommend(&self, prompt: &str) -> Vec<CourseId> {
        self.delay.wait().await;
        let ids = self.recommender.recommend(prompt);
        *self.lock_highlights() = ids.clone();
        ids
    }

    /// Fire-once expiry timer: wait out the TTL, then clear the highlight
    /// set unconditionally.
    ///
    /// Callers spawn one of these per recommendation. A new recommendation
    /// does not cancel a pending timer; clearing is idempotent, so the
    /// last timer to fire simply leaves the set empty.
    pub async fn run_expiry(&self) {
        tokio::time::sleep(self.highlight_ttl).await;
        self.clear_highlights();
    }

    /// Currently highlighted course ids (possibly empty).
    #[must_use]
    pub fn highlighted(&self) -> Vec<CourseId> {
        self.lock_highlights().clone()
    }

    pub fn clear_highlights(&self) {
        self.lock_highlights().clear();
    }

    fn lock_highlights(&self) -> std::sync::MutexGuard<'_, Vec<CourseId>> {
        // Highlights are plain data; recover from a poisoned lock instead
        // of propagating a panic from another task.
        self.highlights
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
