use catalog_core::error::CoreError;
use catalog_core::types::new_id;
use catalog_core::validation::validate_input;
use catalog_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use catalog_db::repositories::{MovieRepo, TheaterRepo};
use catalog_db::DbPool;
use sqlx::SqliteConnection;

use crate::error::AppResult;

const ENTITY: &str = "Movie";

/// Reject a theater reference that does not resolve to a stored theater.
async fn ensure_theater_exists(conn: &mut SqliteConnection, theater_id: &str) -> AppResult<()> {
    if TheaterRepo::exists(conn, theater_id).await? {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid theater_id: {theater_id}")).into())
    }
}

/// List movies, optionally restricted to one theater.
///
/// Filtering on an unknown theater simply yields no rows.
pub async fn list(pool: &DbPool, theater_id: Option<&str>) -> AppResult<Vec<Movie>> {
    let mut tx = pool.begin().await?;
    let movies = match theater_id {
        Some(theater_id) => MovieRepo::list_by_theater(&mut *tx, theater_id).await?,
        None => MovieRepo::list(&mut *tx).await?,
    };
    tx.commit().await?;
    Ok(movies)
}

pub async fn get(pool: &DbPool, id: &str) -> AppResult<Movie> {
    let mut tx = pool.begin().await?;
    let movie = MovieRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tx.commit().await?;
    Ok(movie)
}

pub async fn create(pool: &DbPool, input: CreateMovie) -> AppResult<Movie> {
    validate_input(&input)?;

    let mut tx = catalog_db::begin_write(pool).await?;
    ensure_theater_exists(&mut tx, &input.theater_id).await?;
    let movie = MovieRepo::insert(&mut *tx, &input.into_movie(new_id())).await?;
    tx.commit().await?;

    tracing::info!(movie_id = %movie.id, theater_id = %movie.theater_id, "Movie created");
    Ok(movie)
}

/// Apply a partial update. A new theater reference is checked before any
/// field is changed.
pub async fn update(pool: &DbPool, id: &str, patch: UpdateMovie) -> AppResult<Movie> {
    validate_input(&patch)?;

    let mut tx = catalog_db::begin_write(pool).await?;
    let mut movie = MovieRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    if let Some(theater_id) = patch.theater_id.as_deref() {
        ensure_theater_exists(&mut tx, theater_id).await?;
    }

    movie.merge(patch);
    let movie = MovieRepo::update(&mut *tx, &movie)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tx.commit().await?;
    Ok(movie)
}

pub async fn delete(pool: &DbPool, id: &str) -> AppResult<()> {
    let mut tx = catalog_db::begin_write(pool).await?;
    if !MovieRepo::delete(&mut *tx, id).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    tx.commit().await?;

    tracing::info!(movie_id = %id, "Movie deleted");
    Ok(())
}
