use std::collections::HashSet;
use thiserror::Error;

use crate::model::course::{Category, Course, CourseDraft, Track, Year};
use crate::model::ids::CourseId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate course id: {0}")]
    DuplicateId(CourseId),
}

/// Ordered, duplicate-free collection of courses.
///
/// Created once at startup and never restructured; the only mutation is the
/// per-course progress update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Builds a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two courses share an id.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id().clone()) {
                return Err(CatalogError::DuplicateId(course.id().clone()));
            }
        }
        Ok(Self { courses })
    }

    /// Courses in catalog order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &CourseId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Course ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &CourseId> {
        self.courses.iter().map(Course::id)
    }

    /// Set a course's completed-lesson count, clamped to its lesson count.
    ///
    /// Returns false (and changes nothing) when the id is unknown; an
    /// unknown id is not an error.
    pub fn update_progress(&mut self, id: &CourseId, completed: u32) -> bool {
        match self.courses.iter_mut().find(|course| course.id() == id) {
            Some(course) => {
                course.set_completed_count(completed);
                true
            }
            None => false,
        }
    }

    /// The built-in course catalog: four exam-prep courses and three per
    /// academic year.
    ///
    /// # Panics
    ///
    /// Panics if the built-in seed data fails validation.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn seed() -> Self {
        let rows = vec![
            seed_course(
                "nata-1",
                "NATA Drawing Fundamentals",
                Track::ExamPrep,
                Category::Online,
                24,
                18,
                true,
                "Master perspective drawing and sketching techniques for NATA success",
                "Prof. Rajesh Kumar",
                "8 weeks",
                &["Basic sketching", "Perspective drawing", "Shading techniques", "Composition"],
            ),
            seed_course(
                "nata-2",
                "Mathematical Aptitude for NATA",
                Track::ExamPrep,
                Category::Online,
                20,
                12,
                true,
                "Comprehensive math preparation covering all NATA topics",
                "Dr. Priya Sharma",
                "6 weeks",
                &["Algebra", "Geometry", "Trigonometry", "Mensuration"],
            ),
            seed_course(
                "nata-3",
                "Aesthetic Sensitivity Training",
                Track::ExamPrep,
                Category::Workshop,
                16,
                14,
                true,
                "Develop visual perception and aesthetic judgment for NATA",
                "Prof. Meera Patel",
                "6 weeks",
                &["Visual perception", "Color theory", "Proportion", "Aesthetic judgment"],
            ),
            seed_course(
                "nata-4",
                "NATA Mock Test Series",
                Track::ExamPrep,
                Category::Online,
                12,
                0,
                false,
                "Practice tests and exam strategies for NATA success",
                "Dr. Amit Verma",
                "4 weeks",
                &["Mock tests", "Time management", "Exam strategies", "Performance analysis"],
            ),
            seed_course(
                "year1-1",
                "Architectural Design Studio I",
                year(1),
                Category::Workshop,
                16,
                8,
                true,
                "Introduction to design thinking and spatial concepts",
                "Prof. Meera Patel",
                "12 weeks",
                &["Design process", "Space planning", "Model making", "Presentation skills"],
            ),
            seed_course(
                "year1-2",
                "Building Construction Basics",
                year(1),
                Category::Seminar,
                12,
                6,
                true,
                "Understanding materials and construction methods",
                "Ar. Suresh Reddy",
                "8 weeks",
                &["Materials", "Foundation systems", "Wall construction", "Roofing"],
            ),
            seed_course(
                "year1-3",
                "Architectural History",
                year(1),
                Category::Online,
                14,
                12,
                true,
                "Evolution of architecture through different periods",
                "Dr. Kavita Singh",
                "10 weeks",
                &["Ancient architecture", "Medieval period", "Modern movements", "Contemporary trends"],
            ),
            seed_course(
                "year2-1",
                "Environmental Design",
                year(2),
                Category::Workshop,
                18,
                10,
                true,
                "Climate-responsive architecture and sustainability",
                "Dr. Kavita Singh",
                "10 weeks",
                &["Climate analysis", "Passive design", "Energy efficiency", "Green building"],
            ),
            seed_course(
                "year2-2",
                "Structural Systems",
                year(2),
                Category::Online,
                14,
                0,
                false,
                "Understanding loads, forces, and structural behavior",
                "Prof. Anil Gupta",
                "8 weeks",
                &["Load analysis", "Beam design", "Column design", "Foundation design"],
            ),
            seed_course(
                "year2-3",
                "AutoCAD for Architects",
                year(2),
                Category::Workshop,
                8,
                0,
                false,
                "Complete technical drawing skills for architects",
                "Ar. Rohit Sharma",
                "4 weeks",
                &["2D drafting", "3D modeling", "Layouts", "Plotting"],
            ),
            seed_course(
                "year3-1",
                "Urban Planning Principles",
                year(3),
                Category::Seminar,
                16,
                0,
                false,
                "City planning and urban development strategies",
                "Dr. Ravi Mehta",
                "12 weeks",
                &["Urban theory", "Zoning", "Transportation", "Public spaces"],
            ),
            seed_course(
                "year3-2",
                "Heritage Conservation",
                year(3),
                Category::Workshop,
                20,
                0,
                false,
                "Preserving architectural heritage and restoration techniques",
                "Ar. Deepika Joshi",
                "14 weeks",
                &["Conservation principles", "Documentation", "Restoration methods", "Case studies"],
            ),
            seed_course(
                "year3-3",
                "SketchUp for Architects",
                year(3),
                Category::Online,
                10,
                0,
                false,
                "3D modeling and visualization techniques",
                "Ar. Neha Agarwal",
                "5 weeks",
                &["Basic modeling", "Advanced tools", "Rendering", "Animation"],
            ),
            seed_course(
                "year4-1",
                "Professional Practice",
                year(4),
                Category::Seminar,
                10,
                0,
                false,
                "Business skills and project management for architects",
                "Ar. Vikram Malhotra",
                "6 weeks",
                &["Project management", "Client relations", "Contracts", "Fee structure"],
            ),
            seed_course(
                "year4-2",
                "Advanced Design Studio",
                year(4),
                Category::Workshop,
                24,
                0,
                false,
                "Complex architectural projects and design development",
                "Prof. Sunita Kohli",
                "16 weeks",
                &["Complex programming", "Site analysis", "Design development", "Technical drawings"],
            ),
            seed_course(
                "year4-3",
                "Vastu Shastra in Modern Architecture",
                year(4),
                Category::Seminar,
                6,
                0,
                false,
                "Integrating traditional principles with contemporary design",
                "Dr. Sanjay Prakash",
                "3 weeks",
                &["Vastu principles", "Modern applications", "Case studies", "Design integration"],
            ),
            seed_course(
                "year5-1",
                "Thesis Project",
                year(5),
                Category::Workshop,
                30,
                0,
                false,
                "Independent research and design project",
                "Prof. Ashok Lall",
                "20 weeks",
                &["Research methodology", "Design thesis", "Documentation", "Presentation"],
            ),
            seed_course(
                "year5-2",
                "Contemporary Architecture",
                year(5),
                Category::Online,
                12,
                0,
                false,
                "Current trends and future directions in architecture",
                "Dr. Bijoy Ramachandran",
                "8 weeks",
                &["Modern movements", "Digital architecture", "Parametric design", "Future trends"],
            ),
            seed_course(
                "year5-3",
                "Smart Cities and IoT",
                year(5),
                Category::Seminar,
                8,
                0,
                false,
                "Technology integration in urban planning",
                "Dr. Kiran Bedi",
                "4 weeks",
                &["Smart city concepts", "IoT applications", "Data analytics", "Implementation"],
            ),
        ];

        Self::new(rows).expect("built-in catalog has unique ids")
    }
}

fn year(value: u8) -> Track {
    Track::Year(Year::new(value).expect("seed year is within 1..=5"))
}

#[allow(clippy::too_many_arguments)]
fn seed_course(
    id: &str,
    title: &str,
    track: Track,
    category: Category,
    lesson_count: u32,
    completed_count: u32,
    enrolled: bool,
    tagline: &str,
    instructor: &str,
    duration: &str,
    syllabus: &[&str],
) -> Course {
    CourseDraft {
        id: id.into(),
        title: title.into(),
        track,
        category,
        lesson_count,
        completed_count,
        enrolled,
        tagline: tagline.into(),
        instructor: instructor.into(),
        duration: duration.into(),
        syllabus: syllabus.iter().map(|topic| (*topic).to_string()).collect(),
    }
    .validate()
    .expect("built-in seed course is valid")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_nineteen_unique_courses() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 19);

        let exam_prep = catalog
            .courses()
            .iter()
            .filter(|course| course.track().is_exam_prep())
            .count();
        assert_eq!(exam_prep, 4);
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let a = seed_course(
            "dup",
            "First",
            Track::ExamPrep,
            Category::Online,
            4,
            0,
            false,
            "t",
            "Prof. A",
            "1 week",
            &[],
        );
        let b = seed_course(
            "dup",
            "Second",
            Track::ExamPrep,
            Category::Online,
            4,
            0,
            false,
            "t",
            "Prof. B",
            "1 week",
            &[],
        );
        let err = Catalog::new(vec![a, b]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId(CourseId::new("dup").unwrap())
        );
    }

    #[test]
    fn update_progress_clamps_and_reports_hits() {
        let mut catalog = Catalog::seed();
        let id = CourseId::new("nata-1").unwrap();

        assert!(catalog.update_progress(&id, 1_000));
        assert_eq!(catalog.get(&id).unwrap().completed_count(), 24);

        assert!(catalog.update_progress(&id, 3));
        assert_eq!(catalog.get(&id).unwrap().completed_count(), 3);
    }

    #[test]
    fn update_progress_ignores_unknown_id() {
        let mut catalog = Catalog::seed();
        let before = catalog.clone();
        let missing = CourseId::new("no-such-course").unwrap();

        assert!(!catalog.update_progress(&missing, 5));
        assert_eq!(catalog, before);
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::seed();
        let id = CourseId::new("year3-2").unwrap();
        assert_eq!(catalog.get(&id).unwrap().title(), "Heritage Conservation");
        assert!(catalog.contains(&id));
    }
}
