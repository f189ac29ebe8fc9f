//! Derived-aggregate invariants of the rating service.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Utc};

use ratewise_client::models::{Rating, Session};
use ratewise_client::services::ratings::{RatingError, RatingService};
use ratewise_core::{RatingId, Stars, StoreId, UserId};

use ratewise_integration_tests::{init_tracing, password, session_service, unrated_store};

async fn login(email: &str, pass: &str) -> Session {
    session_service()
        .authenticate(email, &password(pass))
        .await
        .unwrap()
}

fn fresh_service() -> (RatingService, StoreId) {
    let store = unrated_store("s1", "A Store Awaiting Its First Rating", "9");
    let id = store.id.clone();
    let mut service = RatingService::new();
    service.seed_stores(vec![store]);
    (service, id)
}

#[tokio::test]
async fn aggregates_track_every_mutation() {
    init_tracing();
    let (mut service, store_id) = fresh_service();
    let john = login("john@example.com", "User123!").await;
    let alice = login("alice@example.com", "Alice123!").await;

    let store = service.submit_rating(Some(&john), &store_id, 4).unwrap();
    assert!((store.average_rating - 4.0).abs() < f64::EPSILON);
    assert_eq!(store.total_ratings, 1);

    let store = service.submit_rating(Some(&alice), &store_id, 5).unwrap();
    assert!((store.average_rating - 4.5).abs() < f64::EPSILON);
    assert_eq!(store.total_ratings, 2);

    // John updates: the recompute must see the new value, and the count must
    // stay at two - no duplicate record for the (user, store) pair.
    let store = service.submit_rating(Some(&john), &store_id, 2).unwrap();
    assert!((store.average_rating - 3.5).abs() < f64::EPSILON);
    assert_eq!(store.total_ratings, 2);
    assert_eq!(service.rating_count(), 2);
}

#[tokio::test]
async fn resubmitting_updates_the_existing_record() {
    init_tracing();
    let (mut service, store_id) = fresh_service();
    let john = login("john@example.com", "User123!").await;

    service.submit_rating(Some(&john), &store_id, 3).unwrap();
    let first = service.get_rating(john.user_id(), &store_id).unwrap();

    service.submit_rating(Some(&john), &store_id, 5).unwrap();
    let second = service.get_rating(john.user_id(), &store_id).unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.stars.get(), 5);
    assert_eq!(service.rating_count(), 1);
}

#[tokio::test]
async fn means_round_half_away_from_zero_to_one_decimal() {
    init_tracing();
    let (mut service, store_id) = fresh_service();

    let raters = [
        ("john@example.com", "User123!", 4),
        ("alice@example.com", "Alice123!", 4),
        ("jane@store1.com", "Store123!", 3),
        ("admin@example.com", "Admin123!", 2),
    ];

    let mut store = None;
    for (email, pass, stars) in raters {
        let session = login(email, pass).await;
        store = Some(service.submit_rating(Some(&session), &store_id, stars).unwrap());
    }

    // 13 / 4 = 3.25, which rounds away from zero to 3.3.
    let store = store.unwrap();
    assert!((store.average_rating - 3.3).abs() < f64::EPSILON);
    assert_eq!(store.total_ratings, 4);
}

#[tokio::test]
async fn unauthenticated_submissions_are_rejected_without_mutation() {
    init_tracing();
    let (mut service, store_id) = fresh_service();

    let result = service.submit_rating(None, &store_id, 4);

    assert!(matches!(result, Err(RatingError::InvalidCredentials)));
    assert_eq!(service.rating_count(), 0);
    assert_eq!(service.get_store(&store_id).unwrap().total_ratings, 0);
}

#[tokio::test]
async fn out_of_range_stars_are_rejected_without_mutation() {
    init_tracing();
    let (mut service, store_id) = fresh_service();
    let john = login("john@example.com", "User123!").await;

    for stars in [0, 6] {
        let result = service.submit_rating(Some(&john), &store_id, stars);
        assert!(matches!(
            result,
            Err(RatingError::InvalidRatingValue { stars: s }) if s == stars
        ));
    }
    assert_eq!(service.rating_count(), 0);
}

#[tokio::test]
async fn unknown_store_is_rejected() {
    init_tracing();
    let (mut service, _) = fresh_service();
    let john = login("john@example.com", "User123!").await;

    let missing = StoreId::new("missing");
    let result = service.submit_rating(Some(&john), &missing, 4);

    assert!(matches!(result, Err(RatingError::UnknownStore(id)) if id == missing));
}

#[tokio::test]
async fn store_ratings_list_newest_first_with_insertion_order_ties() {
    init_tracing();
    let (mut service, store_id) = fresh_service();

    let at = |s: &str| s.parse::<DateTime<Utc>>().unwrap();
    let seeded = |user: &str, stars: u8, created_at: DateTime<Utc>| Rating {
        id: RatingId::generate(),
        user_id: UserId::new(user),
        store_id: store_id.clone(),
        stars: Stars::new(stars).unwrap(),
        created_at,
    };

    service.seed_ratings(vec![
        seeded("u-early", 3, at("2024-01-10T08:00:00Z")),
        seeded("u-tie-first", 4, at("2024-01-15T10:30:00Z")),
        seeded("u-tie-second", 5, at("2024-01-15T10:30:00Z")),
        seeded("u-late", 2, at("2024-02-01T12:00:00Z")),
    ]);

    let listed = service.list_ratings_for_store(&store_id);
    let order: Vec<&str> = listed.iter().map(|r| r.user_id.as_str()).collect();

    assert_eq!(order, ["u-late", "u-tie-first", "u-tie-second", "u-early"]);
}
