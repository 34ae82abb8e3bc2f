use chrono::Duration;

use atelier_core::Clock;
use atelier_core::model::{Assignment, AssignmentId, DashboardContent, Track};

use crate::delay::NetworkDelay;
use crate::error::AssignmentServiceError;

/// The signed-in student's assignment list with a mock-upload submission
/// workflow.
///
/// Content is looked up per track from the dashboard tables; deadlines are
/// derived from the injected clock. Submission fakes the file upload with
/// the simulated delay and always "uploads" successfully.
pub struct AssignmentService {
    clock: Clock,
    delay: NetworkDelay,
    assignments: Vec<Assignment>,
}

impl AssignmentService {
    /// Build the assignment list for a student's track.
    #[must_use]
    pub fn for_track(track: Track, clock: Clock, delay: NetworkDelay) -> Self {
        let content = DashboardContent::for_track(track);
        let now = clock.now();
        let assignments = content
            .assignments
            .iter()
            .zip(1_u64..)
            .map(|(template, id)| {
                Assignment::new(
                    AssignmentId::new(id),
                    template.title,
                    template.subject,
                    template.brief,
                    now + Duration::days(template.due_in_days),
                )
            })
            .collect();

        Self {
            clock,
            delay,
            assignments,
        }
    }

    /// Rebuild the list for a different track, dropping submission state.
    pub fn switch_track(&mut self, track: Track) {
        *self = Self::for_track(track, self.clock, self.delay);
    }

    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    #[must_use]
    pub fn get(&self, id: AssignmentId) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|assignment| assignment.id() == id)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.assignments
            .iter()
            .filter(|assignment| !assignment.is_submitted())
            .count()
    }

    /// Submit an assignment with the named attachment after the mock
    /// upload delay.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentServiceError::NotFound` for an unknown id, or
    /// `AssignmentServiceError::Assignment` if the assignment was already
    /// submitted or the attachment name is blank.
    pub async fn submit(
        &mut self,
        id: AssignmentId,
        attachment: &str,
    ) -> Result<(), AssignmentServiceError> {
        self.delay.wait().await;
        let now = self.clock.now();
        let assignment = self
            .assignments
            .iter_mut()
            .find(|assignment| assignment.id() == id)
            .ok_or(AssignmentServiceError::NotFound)?;
        assignment.submit(attachment, now)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::model::{AssignmentError, Year};
    use atelier_core::time::{fixed_clock, fixed_now};

    fn service(track: Track) -> AssignmentService {
        AssignmentService::for_track(track, fixed_clock(), NetworkDelay::none())
    }

    #[test]
    fn exam_prep_list_uses_cohort_content() {
        let service = service(Track::ExamPrep);
        let titles: Vec<&str> = service
            .assignments()
            .iter()
            .map(Assignment::title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Perspective Drawing Exercise",
                "Aptitude Test Practice",
                "Portfolio Review"
            ]
        );
        assert_eq!(service.pending_count(), 3);
    }

    #[test]
    fn deadlines_come_from_the_clock() {
        let service = service(Track::Year(Year::new(1).unwrap()));
        let first = &service.assignments()[0];
        assert_eq!(first.due_at(), fixed_now() + Duration::days(2));
    }

    #[tokio::test]
    async fn submit_transitions_once() {
        let mut service = service(Track::ExamPrep);
        let id = service.assignments()[0].id();

        service.submit(id, "perspective.pdf").await.unwrap();
        assert!(service.get(id).unwrap().is_submitted());
        assert_eq!(service.pending_count(), 2);

        let err = service.submit(id, "again.pdf").await.unwrap_err();
        assert!(matches!(
            err,
            AssignmentServiceError::Assignment(AssignmentError::AlreadySubmitted)
        ));
    }

    #[tokio::test]
    async fn submit_unknown_id_is_not_found() {
        let mut service = service(Track::ExamPrep);
        let err = service
            .submit(AssignmentId::new(99), "file.pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, AssignmentServiceError::NotFound));
    }

    #[test]
    fn switch_track_swaps_content_and_resets_state() {
        let mut service = service(Track::ExamPrep);
        service.switch_track(Track::Year(Year::new(4).unwrap()));
        assert_eq!(service.assignments()[0].title(), "Site Analysis Project");
        assert_eq!(service.pending_count(), 3);
    }
}
