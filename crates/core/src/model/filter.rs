use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::course::{Category, Track, Year};

/// Which track partition of the catalog is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackSelector {
    /// Every course, regardless of track.
    All,
    /// Only the exam-preparation cohort.
    ExamPrep,
    /// Only courses for one academic year; exam-prep never matches.
    Year(Year),
}

impl TrackSelector {
    #[must_use]
    pub fn matches(self, track: Track) -> bool {
        match self {
            TrackSelector::All => true,
            TrackSelector::ExamPrep => track.is_exam_prep(),
            TrackSelector::Year(selected) => track.year() == Some(selected),
        }
    }
}

/// Session-scoped catalog filter: track selector, category toggles, and a
/// free-text search. Durable across restarts via the course-preferences
/// partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    track_selector: TrackSelector,
    active_categories: BTreeSet<Category>,
    search_text: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            track_selector: TrackSelector::All,
            active_categories: BTreeSet::new(),
            search_text: String::new(),
        }
    }
}

impl FilterState {
    #[must_use]
    pub fn new(
        track_selector: TrackSelector,
        active_categories: BTreeSet<Category>,
        search_text: String,
    ) -> Self {
        Self {
            track_selector,
            active_categories,
            search_text,
        }
    }

    #[must_use]
    pub fn track_selector(&self) -> TrackSelector {
        self.track_selector
    }

    /// Active category toggles; an empty set means no category restriction.
    #[must_use]
    pub fn active_categories(&self) -> &BTreeSet<Category> {
        &self.active_categories
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_track_selector(&mut self, selector: TrackSelector) {
        self.track_selector = selector;
    }

    /// Toggle a category in or out of the active set.
    ///
    /// Returns true when the category is active after the call.
    pub fn toggle_category(&mut self, category: Category) -> bool {
        if self.active_categories.remove(&category) {
            false
        } else {
            self.active_categories.insert(category);
            true
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// True when every course would pass: all tracks, no category toggles,
    /// blank search.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.track_selector == TrackSelector::All
            && self.active_categories.is_empty()
            && self.search_text.trim().is_empty()
    }
}
