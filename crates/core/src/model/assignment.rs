use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::AssignmentId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssignmentError {
    #[error("assignment has already been submitted")]
    AlreadySubmitted,

    #[error("attachment name cannot be empty")]
    EmptyAttachment,
}

//
// ─── ASSIGNMENT ────────────────────────────────────────────────────────────────
//

/// Submission state of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentStatus {
    Pending,
    Submitted {
        at: DateTime<Utc>,
        attachment: String,
    },
}

/// A dashboard assignment with a single-shot submission workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    id: AssignmentId,
    title: String,
    subject: String,
    brief: String,
    due_at: DateTime<Utc>,
    status: AssignmentStatus,
}

impl Assignment {
    #[must_use]
    pub fn new(
        id: AssignmentId,
        title: impl Into<String>,
        subject: impl Into<String>,
        brief: impl Into<String>,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            subject: subject.into(),
            brief: brief.into(),
            due_at,
            status: AssignmentStatus::Pending,
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> AssignmentId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn brief(&self) -> &str {
        &self.brief
    }

    #[must_use]
    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    #[must_use]
    pub fn status(&self) -> &AssignmentStatus {
        &self.status
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self.status, AssignmentStatus::Submitted { .. })
    }

    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_submitted() && now > self.due_at
    }

    /// Record a submission with the uploaded attachment's name.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentError::AlreadySubmitted` on a second submission,
    /// or `AssignmentError::EmptyAttachment` for a blank attachment name.
    pub fn submit(
        &mut self,
        attachment: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), AssignmentError> {
        if self.is_submitted() {
            return Err(AssignmentError::AlreadySubmitted);
        }
        let attachment = attachment.into().trim().to_owned();
        if attachment.is_empty() {
            return Err(AssignmentError::EmptyAttachment);
        }
        self.status = AssignmentStatus::Submitted {
            at: now,
            attachment,
        };
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
