use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::course::Track;
use crate::model::ids::UserId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("email address cannot be empty")]
    EmptyEmail,

    #[error("email address must contain '@'")]
    MalformedEmail,

    #[error("full name cannot be empty")]
    EmptyFullName,
}

//
// ─── ROLES ─────────────────────────────────────────────────────────────────────
//

/// Who is signing in to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Student,
    Faculty,
    ArchitecturalFirm,
    Institution,
}

impl UserRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Faculty => "faculty",
            UserRole::ArchitecturalFirm => "architectural-firm",
            UserRole::Institution => "institution",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A student's cohort selection: exam-prep or a specific university year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    track: Track,
}

impl StudentProfile {
    #[must_use]
    pub fn new(track: Track) -> Self {
        Self { track }
    }

    #[must_use]
    pub fn track(&self) -> Track {
        self.track
    }
}

//
// ─── USER ──────────────────────────────────────────────────────────────────────
//

/// An authenticated platform user.
///
/// Only students carry a `StudentProfile`; a profile passed for any other
/// role is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: String,
    full_name: String,
    role: UserRole,
    institution: String,
    profile: Option<StudentProfile>,
}

impl User {
    /// Creates a validated user.
    ///
    /// # Errors
    ///
    /// Returns `UserError` if the email is blank or lacks an `@`, or the
    /// full name is blank.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        full_name: impl Into<String>,
        role: UserRole,
        institution: impl Into<String>,
        profile: Option<StudentProfile>,
    ) -> Result<Self, UserError> {
        let email = email.into().trim().to_owned();
        if email.is_empty() {
            return Err(UserError::EmptyEmail);
        }
        if !email.contains('@') {
            return Err(UserError::MalformedEmail);
        }
        let full_name = full_name.into().trim().to_owned();
        if full_name.is_empty() {
            return Err(UserError::EmptyFullName);
        }

        let profile = profile.filter(|_| role == UserRole::Student);

        Ok(Self {
            id,
            email,
            full_name,
            role,
            institution: institution.into(),
            profile,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }

    #[must_use]
    pub fn institution(&self) -> &str {
        &self.institution
    }

    #[must_use]
    pub fn profile(&self) -> Option<&StudentProfile> {
        self.profile.as_ref()
    }

    /// Replace the student profile. No-op for non-student roles.
    pub fn set_profile(&mut self, profile: StudentProfile) {
        if self.role == UserRole::Student {
            self.profile = Some(profile);
        }
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) -> Result<(), UserError> {
        let full_name = full_name.into().trim().to_owned();
        if full_name.is_empty() {
            return Err(UserError::EmptyFullName);
        }
        self.full_name = full_name;
        Ok(())
    }

    pub fn set_institution(&mut self, institution: impl Into<String>) {
        self.institution = institution.into();
    }
}

/// Fabricate a display name from an email's local part: `.` and `_` become
/// spaces, each word gets a leading capital.
#[must_use]
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
