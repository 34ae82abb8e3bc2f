use std::sync::Arc;

use atelier_core::model::{
    StudentProfile, Track, User, UserId, UserRole, display_name_from_email,
};
use storage::repository::StudentPrefsRepository;

use crate::delay::NetworkDelay;
use crate::error::AuthServiceError;

/// Signup form payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub institution: String,
    /// Students only; ignored for other roles.
    pub track: Option<Track>,
}

/// Mock authentication for the demo platform.
///
/// Every login and signup resolves successfully after the simulated
/// round-trip and fabricates a plausible user; nothing is verified and no
/// credentials are stored. Only the student's track selection is durable,
/// in the student-preferences partition.
pub struct AuthService {
    delay: NetworkDelay,
    prefs: Arc<dyn StudentPrefsRepository>,
    user: Option<User>,
}

impl AuthService {
    #[must_use]
    pub fn new(delay: NetworkDelay, prefs: Arc<dyn StudentPrefsRepository>) -> Self {
        Self {
            delay,
            prefs,
            user: None,
        }
    }

    /// Sign in with any credentials; the password is not checked.
    ///
    /// Students resume their persisted track, defaulting to exam-prep.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::User` for an invalid email, or
    /// `AuthServiceError::Storage` if the track cannot be read.
    pub async fn login(
        &mut self,
        email: &str,
        _password: &str,
        role: UserRole,
    ) -> Result<User, AuthServiceError> {
        self.delay.wait().await;

        let profile = if role == UserRole::Student {
            let track = self.prefs.load_track().await?.unwrap_or(Track::ExamPrep);
            Some(StudentProfile::new(track))
        } else {
            None
        };

        let user = User::new(
            UserId::generate(),
            email,
            display_name_from_email(email),
            role,
            institution_for(role),
            profile,
        )?;

        self.user = Some(user.clone());
        Ok(user)
    }

    /// Create an account; always succeeds after the simulated round-trip.
    ///
    /// A student's chosen track (default exam-prep) is persisted.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::User` for invalid fields, or
    /// `AuthServiceError::Storage` if the track cannot be written.
    pub async fn signup(&mut self, request: SignupRequest) -> Result<User, AuthServiceError> {
        self.delay.wait().await;

        let profile = if request.role == UserRole::Student {
            let track = request.track.unwrap_or(Track::ExamPrep);
            self.prefs.save_track(track).await?;
            Some(StudentProfile::new(track))
        } else {
            None
        };

        let user = User::new(
            UserId::generate(),
            request.email,
            request.full_name,
            request.role,
            request.institution,
            profile,
        )?;

        self.user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Change the signed-in student's track and persist it.
    ///
    /// No-op for non-student sessions (the profile setter ignores them).
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Storage` if the track cannot be written.
    pub async fn update_student_track(&mut self, track: Track) -> Result<(), AuthServiceError> {
        self.prefs.save_track(track).await?;
        if let Some(user) = self.user.as_mut() {
            user.set_profile(StudentProfile::new(track));
        }
        Ok(())
    }

    /// Update profile fields on the signed-in user; no-op when logged out.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::User` if the new full name is blank.
    pub fn update_profile(
        &mut self,
        full_name: Option<String>,
        institution: Option<String>,
    ) -> Result<(), AuthServiceError> {
        let Some(user) = self.user.as_mut() else {
            return Ok(());
        };
        if let Some(full_name) = full_name {
            user.set_full_name(full_name)?;
        }
        if let Some(institution) = institution {
            user.set_institution(institution);
        }
        Ok(())
    }
}

/// Fabricated institution per role, looked up from data rather than
/// branched inline.
#[must_use]
pub fn institution_for(role: UserRole) -> &'static str {
    match role {
        UserRole::Student => "SPA Delhi",
        UserRole::Faculty => "CEPT University",
        UserRole::ArchitecturalFirm => "Kumar Associates",
        UserRole::Institution => "Architecture Institute",
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
