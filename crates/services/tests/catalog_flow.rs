use atelier_core::model::{Category, CourseId, TrackSelector, Year};
use atelier_core::time::fixed_clock;
use services::{AppServices, NetworkDelay};
use storage::repository::Storage;

fn id(raw: &str) -> CourseId {
    CourseId::new(raw).unwrap()
}

async fn app_over(storage: &Storage) -> AppServices {
    AppServices::with_storage(storage.clone(), fixed_clock(), NetworkDelay::none())
        .await
        .expect("hydrate services")
}

#[tokio::test]
async fn filter_and_wishlist_survive_a_restart() {
    let storage = Storage::in_memory();

    {
        let mut app = app_over(&storage).await;
        app.catalog_mut()
            .set_track_selector(TrackSelector::ExamPrep)
            .await
            .unwrap();
        app.catalog_mut()
            .toggle_category(Category::Online)
            .await
            .unwrap();
        app.catalog_mut().set_search_text("nata").await.unwrap();
        app.wishlist_mut().add(&id("nata-1")).await.unwrap();
        app.wishlist_mut().add(&id("year2-1")).await.unwrap();
    }

    let app = app_over(&storage).await;
    let filter = app.catalog().filter();
    assert_eq!(filter.track_selector(), TrackSelector::ExamPrep);
    assert!(filter.active_categories().contains(&Category::Online));
    assert_eq!(filter.search_text(), "nata");

    assert_eq!(app.wishlist().count(), 2);
    assert!(app.wishlist().contains(&id("nata-1")));
    assert!(app.wishlist().contains(&id("year2-1")));
}

#[tokio::test]
async fn independent_storages_are_isolated() {
    let mut first = AppServices::in_memory(fixed_clock(), NetworkDelay::none())
        .await
        .unwrap();
    let second = AppServices::in_memory(fixed_clock(), NetworkDelay::none())
        .await
        .unwrap();

    first.wishlist_mut().add(&id("nata-1")).await.unwrap();
    assert_eq!(first.wishlist().count(), 1);
    assert_eq!(second.wishlist().count(), 0);
}

#[tokio::test]
async fn track_selectors_partition_the_catalog() {
    let storage = Storage::in_memory();
    let mut app = app_over(&storage).await;

    app.catalog_mut()
        .set_track_selector(TrackSelector::ExamPrep)
        .await
        .unwrap();
    let exam_prep: Vec<&str> = app
        .catalog()
        .visible()
        .iter()
        .map(|course| course.id().as_str())
        .collect();
    assert_eq!(exam_prep, vec!["nata-1", "nata-2", "nata-3", "nata-4"]);

    app.catalog_mut()
        .set_track_selector(TrackSelector::Year(Year::new(1).unwrap()))
        .await
        .unwrap();
    let year1: Vec<&str> = app
        .catalog()
        .visible()
        .iter()
        .map(|course| course.id().as_str())
        .collect();
    assert_eq!(year1, vec!["year1-1", "year1-2", "year1-3"]);
}

#[tokio::test]
async fn progress_updates_clamp_and_stay_in_memory() {
    let storage = Storage::in_memory();
    let mut app = app_over(&storage).await;
    let course = id("nata-2");

    assert!(app.catalog_mut().update_progress(&course, 999));
    assert_eq!(
        app.catalog().catalog().get(&course).unwrap().completed_count(),
        20
    );

    // The mocked tracker is session-local: a fresh hydration sees seed data.
    let fresh = app_over(&storage).await;
    assert_eq!(
        fresh.catalog().catalog().get(&course).unwrap().completed_count(),
        12
    );
}

#[tokio::test]
async fn pagination_caps_then_extends() {
    let storage = Storage::in_memory();
    let mut app = app_over(&storage).await;

    let first = app.catalog().page();
    assert_eq!(first.courses.len(), 12);
    assert_eq!(first.total_matching, 19);
    assert!(first.has_more);

    app.catalog_mut().load_more();
    let second = app.catalog().page();
    assert_eq!(second.courses.len(), 19);
    assert!(!second.has_more);
}
