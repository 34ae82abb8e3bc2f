use atelier_core::model::{Track, UserRole, Year};
use atelier_core::time::fixed_clock;
use services::{AppServices, NetworkDelay, SignupRequest};
use storage::repository::Storage;

async fn app_over(storage: &Storage) -> AppServices {
    AppServices::with_storage(storage.clone(), fixed_clock(), NetworkDelay::none())
        .await
        .expect("hydrate services")
}

#[tokio::test]
async fn login_recommend_and_submit_round_trip() {
    let storage = Storage::in_memory();
    let mut app = app_over(&storage).await;

    let user = app
        .auth_mut()
        .login("jane.doe@example.com", "pw", UserRole::Student)
        .await
        .unwrap();
    assert_eq!(user.full_name(), "Jane Doe");
    assert_eq!(user.profile().unwrap().track(), Track::ExamPrep);

    let recommendations = app.recommendations();
    let picks = recommendations.recommend("I want to improve my sketching").await;
    assert_eq!(picks.len(), 3);
    assert_eq!(recommendations.highlighted(), picks);

    // Same prompt, same picks: the stub is deterministic.
    let again = recommendations
        .recommend("I want to improve my sketching")
        .await;
    assert_eq!(again, picks);

    let assignment_id = app.assignments().assignments()[0].id();
    app.assignments_mut()
        .submit(assignment_id, "sketches.pdf")
        .await
        .unwrap();
    assert!(app.assignments().get(assignment_id).unwrap().is_submitted());
}

#[tokio::test]
async fn student_track_switch_changes_dashboard_after_restart() {
    let storage = Storage::in_memory();

    {
        let mut app = app_over(&storage).await;
        app.auth_mut()
            .login("student@example.com", "pw", UserRole::Student)
            .await
            .unwrap();
        // Exam-prep content by default.
        assert_eq!(
            app.assignments().assignments()[0].title(),
            "Perspective Drawing Exercise"
        );

        app.auth_mut()
            .update_student_track(Track::Year(Year::new(2).unwrap()))
            .await
            .unwrap();
    }

    // A fresh context hydrates the persisted track and swaps the content.
    let app = app_over(&storage).await;
    assert_eq!(
        app.assignments().assignments()[0].title(),
        "Site Analysis Project"
    );
}

#[tokio::test]
async fn signup_then_relogin_keeps_the_chosen_track() {
    let storage = Storage::in_memory();
    let mut app = app_over(&storage).await;
    let year4 = Track::Year(Year::new(4).unwrap());

    app.auth_mut()
        .signup(SignupRequest {
            email: "senior@example.com".into(),
            full_name: "Senior Student".into(),
            role: UserRole::Student,
            institution: "SPA Delhi".into(),
            track: Some(year4),
        })
        .await
        .unwrap();

    app.auth_mut().logout();
    let user = app
        .auth_mut()
        .login("senior@example.com", "pw", UserRole::Student)
        .await
        .unwrap();
    assert_eq!(user.profile().unwrap().track(), year4);
}

#[tokio::test(start_paused = true)]
async fn highlights_expire_and_clearing_is_idempotent() {
    let storage = Storage::in_memory();
    let app = app_over(&storage).await;

    let recommendations = app.recommendations();
    recommendations.recommend("urban planning basics").await;
    assert!(!recommendations.highlighted().is_empty());

    // The paused clock fast-forwards the fire-once TTL timer.
    recommendations.run_expiry().await;
    assert!(recommendations.highlighted().is_empty());

    // An overlapping timer firing on an already-empty set is harmless.
    recommendations.run_expiry().await;
    assert!(recommendations.highlighted().is_empty());
}
