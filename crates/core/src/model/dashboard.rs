//! Per-cohort dashboard content tables.
//!
//! The dashboard swaps assignment and event copy depending on whether the
//! student is preparing for the entrance exam or enrolled at university.
//! That selection lives here as data keyed by track, so it can be tested
//! without any rendering involved.

use crate::model::course::Track;

/// Kind of an upcoming event, used for presentation grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Exam,
    Lecture,
    Workshop,
    CareerFair,
}

/// Blueprint for one dashboard assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentTemplate {
    pub title: &'static str,
    pub subject: &'static str,
    pub brief: &'static str,
    /// Days from "now" until the deadline.
    pub due_in_days: i64,
}

/// Blueprint for one upcoming event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTemplate {
    pub title: &'static str,
    pub kind: EventKind,
    /// Days from "now" until the event.
    pub starts_in_days: i64,
}

/// The full set of cohort-specific dashboard copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardContent {
    pub assignments: &'static [AssignmentTemplate],
    pub events: &'static [EventTemplate],
}

const EXAM_PREP_ASSIGNMENTS: &[AssignmentTemplate] = &[
    AssignmentTemplate {
        title: "Perspective Drawing Exercise",
        subject: "Drawing",
        brief: "Complete the following perspective drawing exercises to demonstrate \
                your understanding of vanishing points and spatial representation.",
        due_in_days: 2,
    },
    AssignmentTemplate {
        title: "Aptitude Test Practice",
        subject: "Mathematics",
        brief: "Practice these mathematical aptitude questions to prepare for the \
                entrance exam.",
        due_in_days: 5,
    },
    AssignmentTemplate {
        title: "Portfolio Review",
        subject: "General",
        brief: "Compile and submit a preliminary portfolio of your work.",
        due_in_days: 7,
    },
];

const UNIVERSITY_ASSIGNMENTS: &[AssignmentTemplate] = &[
    AssignmentTemplate {
        title: "Site Analysis Project",
        subject: "Design Studio",
        brief: "Analyze the provided site and answer questions about its context, \
                constraints, and opportunities.",
        due_in_days: 2,
    },
    AssignmentTemplate {
        title: "Material Study Report",
        subject: "Construction",
        brief: "Research and analyze the assigned building material, addressing the \
                questions below.",
        due_in_days: 5,
    },
    AssignmentTemplate {
        title: "Case Study Analysis",
        subject: "Theory",
        brief: "Analyze the assigned architectural case study.",
        due_in_days: 7,
    },
];

const EXAM_PREP_EVENTS: &[EventTemplate] = &[
    EventTemplate {
        title: "Entrance Mock Test Series",
        kind: EventKind::Exam,
        starts_in_days: 8,
    },
    EventTemplate {
        title: "Drawing Workshop",
        kind: EventKind::Workshop,
        starts_in_days: 11,
    },
    EventTemplate {
        title: "Architecture Career Fair",
        kind: EventKind::CareerFair,
        starts_in_days: 15,
    },
];

const UNIVERSITY_EVENTS: &[EventTemplate] = &[
    EventTemplate {
        title: "Guest Lecture: Sustainable Architecture",
        kind: EventKind::Lecture,
        starts_in_days: 8,
    },
    EventTemplate {
        title: "Studio Review Presentation",
        kind: EventKind::Workshop,
        starts_in_days: 11,
    },
    EventTemplate {
        title: "Architecture Career Fair",
        kind: EventKind::CareerFair,
        starts_in_days: 15,
    },
];

const EXAM_PREP_CONTENT: DashboardContent = DashboardContent {
    assignments: EXAM_PREP_ASSIGNMENTS,
    events: EXAM_PREP_EVENTS,
};

const UNIVERSITY_CONTENT: DashboardContent = DashboardContent {
    assignments: UNIVERSITY_ASSIGNMENTS,
    events: UNIVERSITY_EVENTS,
};

impl DashboardContent {
    /// Select the content table for a student's track.
    ///
    /// All university years share one table; the exam-prep cohort has its
    /// own.
    #[must_use]
    pub fn for_track(track: Track) -> &'static DashboardContent {
        match track {
            Track::ExamPrep => &EXAM_PREP_CONTENT,
            Track::Year(_) => &UNIVERSITY_CONTENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::Year;

    #[test]
    fn exam_prep_and_university_differ() {
        let exam_prep = DashboardContent::for_track(Track::ExamPrep);
        let university = DashboardContent::for_track(Track::Year(Year::new(1).unwrap()));

        assert_eq!(exam_prep.assignments[0].title, "Perspective Drawing Exercise");
        assert_eq!(university.assignments[0].title, "Site Analysis Project");
        assert_ne!(exam_prep.assignments, university.assignments);
    }

    #[test]
    fn all_university_years_share_content() {
        let year1 = DashboardContent::for_track(Track::Year(Year::new(1).unwrap()));
        let year5 = DashboardContent::for_track(Track::Year(Year::new(5).unwrap()));
        assert_eq!(year1, year5);
    }

    #[test]
    fn tables_are_fully_populated() {
        for track in [Track::ExamPrep, Track::Year(Year::new(2).unwrap())] {
            let content = DashboardContent::for_track(track);
            assert_eq!(content.assignments.len(), 3);
            assert_eq!(content.events.len(), 3);
            assert!(content.events.iter().any(|e| e.kind == EventKind::CareerFair));
        }
    }
}
