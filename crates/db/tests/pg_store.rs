//! Integration tests for the PostgreSQL record store.
//!
//! These need a live server (`DATABASE_URL`) and are ignored by default.
//! Run with `cargo test -p agency-db -- --ignored`.

use agency_core::validation::Gender;
use agency_db::models::actor::{CreateActor, UpdateActor};
use agency_db::models::movie::{CreateMovie, UpdateMovie};
use agency_db::repositories::ActorRepo;
use agency_db::store::{Page, PgStore, RecordStore};
use chrono::NaiveDate;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_actor(name: &str, age: i32, gender: Gender) -> CreateActor {
    CreateActor {
        name: name.to_string(),
        age,
        gender,
    }
}

fn new_movie(title: &str) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        release_date: NaiveDate::from_ymd_opt(2010, 10, 8).unwrap(),
    }
}

// ---------------------------------------------------------------------------
// Actors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_actor_crud_cycle(pool: PgPool) {
    let store = PgStore::new(pool);

    let actor = store
        .insert_actor(&new_actor("first_actor", 30, Gender::Male))
        .await
        .unwrap();
    assert_eq!(actor.name, "first_actor");
    assert_eq!(actor.gender, Gender::Male);

    let patch = UpdateActor {
        age: Some(80),
        ..Default::default()
    };
    let updated = store.update_actor(actor.id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.age, 80);
    assert_eq!(updated.name, "first_actor");

    assert!(store.delete_actor(actor.id).await.unwrap());
    assert!(store.find_actor(actor.id).await.unwrap().is_none());
    assert!(!store.delete_actor(actor.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_actor_returns_none(pool: PgPool) {
    let store = PgStore::new(pool);
    let patch = UpdateActor {
        name: Some("ghost".into()),
        ..Default::default()
    };
    assert!(store.update_actor(999_999, &patch).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_check_constraints_reject_bad_rows(pool: PgPool) {
    let negative = sqlx::query("INSERT INTO actors (name, age, gender) VALUES ('x', -1, 'M')")
        .execute(&pool)
        .await;
    assert!(negative.is_err(), "negative age must violate the check");

    let gender = sqlx::query("INSERT INTO actors (name, age, gender) VALUES ('x', 1, 'X')")
        .execute(&pool)
        .await;
    assert!(gender.is_err(), "gender outside M/F must violate the check");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_actor_list_is_in_creation_order(pool: PgPool) {
    for name in ["a", "b", "c"] {
        ActorRepo::create(&pool, &new_actor(name, 20, Gender::Female))
            .await
            .unwrap();
    }

    let names: Vec<_> = ActorRepo::list(&pool, None, 0)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_movie_update_and_pagination(pool: PgPool) {
    let store = PgStore::new(pool);
    for i in 1..=12 {
        store.insert_movie(&new_movie(&format!("movie {i}"))).await.unwrap();
    }

    let second_page = store
        .list_movies(Some(Page { number: 2, size: 10 }))
        .await
        .unwrap();
    assert_eq!(second_page.len(), 2);
    assert_eq!(second_page[0].title, "movie 11");

    let target = second_page[1].id;
    let patch = UpdateMovie {
        release_date: NaiveDate::from_ymd_opt(2000, 9, 22),
        ..Default::default()
    };
    let updated = store.update_movie(target, &patch).await.unwrap().unwrap();
    assert_eq!(updated.title, "movie 12");
    assert_eq!(updated.release_date.to_string(), "2000-09-22");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_health_check(pool: PgPool) {
    let store = PgStore::new(pool);
    store.health_check().await.unwrap();
}
