//! Pure derivation logic over the catalog: the filter/query engine and the
//! presentation-side result pager.
//!
//! Everything here is a function of its inputs; results are recomputed fresh
//! on every call and the catalog order is always preserved (stable filter,
//! no re-sort).

use crate::model::{Catalog, Course, FilterState, Track};

/// How many results the pager exposes initially and adds per load-more.
pub const PAGE_SIZE: usize = 12;

fn matches_categories(filter: &FilterState, course: &Course) -> bool {
    filter.active_categories().is_empty()
        || filter.active_categories().contains(&course.category())
}

fn matches_search(needle: &str, course: &Course) -> bool {
    if needle.is_empty() {
        return true;
    }
    course.title().to_lowercase().contains(needle)
        || course.tagline().to_lowercase().contains(needle)
        || course.instructor().to_lowercase().contains(needle)
}

/// The visible subset of the catalog for the given filter, in catalog order.
///
/// A course is included iff the track, category, and search rules all pass.
#[must_use]
pub fn visible_courses<'a>(catalog: &'a Catalog, filter: &FilterState) -> Vec<&'a Course> {
    let needle = filter.search_text().trim().to_lowercase();
    catalog
        .courses()
        .iter()
        .filter(|course| filter.track_selector().matches(course.track()))
        .filter(|course| matches_categories(filter, course))
        .filter(|course| matches_search(&needle, course))
        .collect()
}

/// Enrolled courses for a student's track, in catalog order.
///
/// Exam-prep students see enrolled exam-prep courses; university students
/// see enrolled courses of their own year only.
#[must_use]
pub fn enrolled_for_track<'a>(catalog: &'a Catalog, track: Track) -> Vec<&'a Course> {
    catalog
        .courses()
        .iter()
        .filter(|course| course.enrolled() && course.track() == track)
        .collect()
}

/// Running cap on how many filtered results the UI renders.
///
/// Grows by [`PAGE_SIZE`] on explicit request and is capped at the filtered
/// total at that moment. The cap is intentionally not reset when filters
/// change, matching the dashboard's behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    displayed: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            displayed: PAGE_SIZE,
        }
    }

    /// Current render cap.
    #[must_use]
    pub fn displayed(&self) -> usize {
        self.displayed
    }

    /// True when results exist beyond the current cap.
    #[must_use]
    pub fn has_more(&self, total_matching: usize) -> bool {
        self.displayed < total_matching
    }

    /// Grow the cap by one page, bounded by the filtered total.
    pub fn load_more(&mut self, total_matching: usize) {
        self.displayed = (self.displayed + PAGE_SIZE).min(total_matching);
    }
}

/// One rendered page of filtered results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage<'a> {
    pub courses: Vec<&'a Course>,
    pub total_matching: usize,
    pub has_more: bool,
}

/// Apply the filter, then cap the result at the pager's current size.
#[must_use]
pub fn page<'a>(catalog: &'a Catalog, filter: &FilterState, pager: &Pager) -> CatalogPage<'a> {
    let filtered = visible_courses(catalog, filter);
    let total_matching = filtered.len();
    let courses: Vec<&Course> = filtered.into_iter().take(pager.displayed()).collect();
    CatalogPage {
        courses,
        total_matching,
        has_more: pager.has_more(total_matching),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
