use atelier_core::model::{Category, CourseId, FilterState, Track, TrackSelector, Year};
use storage::repository::{CoursePrefsRepository, StudentPrefsRepository};
use storage::sqlite::SqliteRepository;

fn id(raw: &str) -> CourseId {
    CourseId::new(raw).unwrap()
}

#[tokio::test]
async fn sqlite_round_trips_filter_state() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_filter?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.load_filter().await.unwrap().is_none());

    let mut filter = FilterState::default();
    filter.set_track_selector(TrackSelector::Year(Year::new(3).unwrap()));
    filter.toggle_category(Category::Workshop);
    filter.toggle_category(Category::Seminar);
    filter.set_search_text("heritage");
    repo.save_filter(&filter).await.unwrap();

    let loaded = repo.load_filter().await.unwrap().expect("filter persisted");
    assert_eq!(loaded, filter);

    // Overwriting replaces the category set rather than accumulating it.
    let mut narrowed = loaded;
    narrowed.toggle_category(Category::Workshop);
    repo.save_filter(&narrowed).await.unwrap();

    let reloaded = repo.load_filter().await.unwrap().expect("filter persisted");
    assert_eq!(
        reloaded.active_categories().iter().copied().collect::<Vec<_>>(),
        vec![Category::Seminar]
    );
}

#[tokio::test]
async fn sqlite_wishlist_is_a_set() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_wishlist?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.add_wishlist(&id("nata-1")).await.unwrap();
    repo.add_wishlist(&id("year1-2")).await.unwrap();
    repo.add_wishlist(&id("nata-1")).await.unwrap();

    let mut ids: Vec<String> = repo
        .load_wishlist()
        .await
        .unwrap()
        .into_iter()
        .map(|course_id| course_id.as_str().to_string())
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["nata-1", "year1-2"]);

    repo.remove_wishlist(&id("ghost")).await.unwrap();
    repo.remove_wishlist(&id("nata-1")).await.unwrap();
    assert_eq!(repo.load_wishlist().await.unwrap().len(), 1);
}

#[tokio::test]
async fn sqlite_round_trips_student_track() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_track?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.load_track().await.unwrap().is_none());

    repo.save_track(Track::ExamPrep).await.unwrap();
    assert_eq!(repo.load_track().await.unwrap(), Some(Track::ExamPrep));

    let year2 = Track::Year(Year::new(2).unwrap());
    repo.save_track(year2).await.unwrap();
    assert_eq!(repo.load_track().await.unwrap(), Some(year2));
}

#[tokio::test]
async fn partitions_are_independent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_partitions?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.save_track(Track::ExamPrep).await.unwrap();

    // Clearing course preferences leaves the student partition untouched.
    repo.save_filter(&FilterState::default()).await.unwrap();
    repo.add_wishlist(&id("nata-2")).await.unwrap();
    repo.remove_wishlist(&id("nata-2")).await.unwrap();

    assert_eq!(repo.load_track().await.unwrap(), Some(Track::ExamPrep));
    assert!(repo.load_wishlist().await.unwrap().is_empty());
}
