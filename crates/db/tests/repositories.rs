//! Repository tests against a migrated SQLite database.

use catalog_db::models::movie::Movie;
use catalog_db::models::theater::Theater;
use catalog_db::repositories::{MovieRepo, TheaterRepo};
use sqlx::SqlitePool;

fn theater(id: &str) -> Theater {
    Theater {
        id: id.into(),
        name: format!("Theater {id}"),
        brand: "CGV".into(),
        location: "Seoul".into(),
        operating_hours: "09:00-24:00".into(),
    }
}

fn movie(id: &str, theater_id: &str) -> Movie {
    Movie {
        id: id.into(),
        title: format!("Movie {id}"),
        distributor: "Showbox".into(),
        ticket_price: 13000,
        runtime_minutes: 120,
        genre: "Drama".into(),
        theater_id: theater_id.into(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn insert_and_find_theater(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    assert!(TheaterRepo::is_empty(&mut conn).await.unwrap());

    let stored = TheaterRepo::insert(&mut conn, &theater("t-1")).await.unwrap();
    assert_eq!(stored, theater("t-1"));

    assert!(TheaterRepo::exists(&mut conn, "t-1").await.unwrap());
    assert!(!TheaterRepo::exists(&mut conn, "t-2").await.unwrap());
    assert!(!TheaterRepo::is_empty(&mut conn).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_theater_returns_none(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    assert!(TheaterRepo::update(&mut conn, &theater("ghost")).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn foreign_key_rejects_dangling_movie(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let err = MovieRepo::insert(&mut conn, &movie("m-1", "nowhere")).await.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert!(db_err.is_foreign_key_violation());
}

#[sqlx::test(migrations = "./migrations")]
async fn foreign_key_blocks_deleting_referenced_theater(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    TheaterRepo::insert(&mut conn, &theater("t-1")).await.unwrap();
    MovieRepo::insert(&mut conn, &movie("m-1", "t-1")).await.unwrap();

    assert!(TheaterRepo::delete(&mut conn, "t-1").await.is_err());
    assert!(TheaterRepo::exists(&mut conn, "t-1").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_by_theater_filters_on_equality(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    TheaterRepo::insert(&mut conn, &theater("t-1")).await.unwrap();
    TheaterRepo::insert(&mut conn, &theater("t-2")).await.unwrap();
    MovieRepo::insert(&mut conn, &movie("m-1", "t-1")).await.unwrap();
    MovieRepo::insert(&mut conn, &movie("m-2", "t-2")).await.unwrap();
    MovieRepo::insert(&mut conn, &movie("m-3", "t-1")).await.unwrap();

    let mut ids: Vec<String> = MovieRepo::list_by_theater(&mut conn, "t-1")
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    ids.sort();
    assert_eq!(ids, ["m-1", "m-3"]);
    assert!(MovieRepo::any_for_theater(&mut conn, "t-2").await.unwrap());
    assert_eq!(MovieRepo::list(&mut conn).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_reports_whether_a_row_was_removed(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    TheaterRepo::insert(&mut conn, &theater("t-1")).await.unwrap();
    MovieRepo::insert(&mut conn, &movie("m-1", "t-1")).await.unwrap();

    assert!(MovieRepo::delete(&mut conn, "m-1").await.unwrap());
    assert!(!MovieRepo::delete(&mut conn, "m-1").await.unwrap());
    assert!(TheaterRepo::delete(&mut conn, "t-1").await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn count_tracks_rows_per_table(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    assert_eq!(TheaterRepo::count(&mut conn).await.unwrap(), 0);

    TheaterRepo::insert(&mut conn, &theater("t-1")).await.unwrap();
    TheaterRepo::insert(&mut conn, &theater("t-2")).await.unwrap();
    MovieRepo::insert(&mut conn, &movie("m-1", "t-2")).await.unwrap();

    assert_eq!(TheaterRepo::count(&mut conn).await.unwrap(), 2);
    assert_eq!(MovieRepo::count(&mut conn).await.unwrap(), 1);
}
