use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::{CourseId, IdError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error(transparent)]
    Id(#[from] IdError),

    #[error("study year must be between 1 and 5")]
    InvalidYear,

    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("course instructor cannot be empty")]
    EmptyInstructor,

    #[error("lesson count must be > 0")]
    InvalidLessonCount,

    #[error("completed count cannot exceed lesson count")]
    CompletedOutOfRange,
}

/// Error for parsing a `Category` from its stored text form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown course category: {0}")]
pub struct ParseCategoryError(pub String);

//
// ─── TRACKS ────────────────────────────────────────────────────────────────────
//

/// Academic year within the five-year degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Year(u8);

impl Year {
    /// Creates a validated year.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::InvalidYear` if outside 1..=5.
    pub fn new(value: u8) -> Result<Self, CourseError> {
        if !(1..=5).contains(&value) {
            return Err(CourseError::InvalidYear);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The course's audience partition: the exam-preparation cohort or a
/// specific academic year. Mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    ExamPrep,
    Year(Year),
}

impl Track {
    #[must_use]
    pub fn is_exam_prep(self) -> bool {
        matches!(self, Track::ExamPrep)
    }

    /// Returns the academic year, or `None` for the exam-prep cohort.
    #[must_use]
    pub fn year(self) -> Option<Year> {
        match self {
            Track::ExamPrep => None,
            Track::Year(year) => Some(year),
        }
    }
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Delivery format of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Workshop,
    Seminar,
    Online,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Workshop, Category::Seminar, Category::Online];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Workshop => "Workshop",
            Category::Seminar => "Seminar",
            Category::Online => "Online",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Workshop" => Ok(Category::Workshop),
            "Seminar" => Ok(Category::Seminar),
            "Online" => Ok(Category::Online),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// Unvalidated course fields, as authored in seed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub id: String,
    pub title: String,
    pub track: Track,
    pub category: Category,
    pub lesson_count: u32,
    pub completed_count: u32,
    pub enrolled: bool,
    pub tagline: String,
    pub instructor: String,
    pub duration: String,
    pub syllabus: Vec<String>,
}

impl CourseDraft {
    /// Validate the draft into a `Course`.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if the id, title, or instructor is blank, the
    /// lesson count is zero, or the completed count exceeds it.
    pub fn validate(self) -> Result<Course, CourseError> {
        let id = CourseId::new(self.id)?;
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        let instructor = self.instructor.trim().to_owned();
        if instructor.is_empty() {
            return Err(CourseError::EmptyInstructor);
        }
        if self.lesson_count == 0 {
            return Err(CourseError::InvalidLessonCount);
        }
        if self.completed_count > self.lesson_count {
            return Err(CourseError::CompletedOutOfRange);
        }

        Ok(Course {
            id,
            title,
            track: self.track,
            category: self.category,
            lesson_count: self.lesson_count,
            completed_count: self.completed_count,
            enrolled: self.enrolled,
            tagline: self.tagline,
            instructor,
            duration: self.duration,
            syllabus: self.syllabus,
        })
    }
}

/// A single catalog entry.
///
/// Structurally immutable once seeded; only `completed_count` ever changes,
/// through the explicit progress-update operation. No invariant couples
/// `enrolled` and `completed_count`: the seed data is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    track: Track,
    category: Category,
    lesson_count: u32,
    completed_count: u32,
    enrolled: bool,
    tagline: String,
    instructor: String,
    duration: String,
    syllabus: Vec<String>,
}

impl Course {
    // Accessors
    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn track(&self) -> Track {
        self.track
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn lesson_count(&self) -> u32 {
        self.lesson_count
    }

    #[must_use]
    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    #[must_use]
    pub fn enrolled(&self) -> bool {
        self.enrolled
    }

    #[must_use]
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn syllabus(&self) -> &[String] {
        &self.syllabus
    }

    /// Set the completed-lesson count, clamped to `[0, lesson_count]`.
    ///
    /// Out-of-range input is corrected rather than rejected.
    pub fn set_completed_count(&mut self, completed: u32) {
        self.completed_count = completed.min(self.lesson_count);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
