use catalog_core::error::CoreError;
use catalog_core::types::new_id;
use catalog_core::validation::validate_input;
use catalog_db::models::movie::Movie;
use catalog_db::models::theater::{CreateTheater, Theater, UpdateTheater};
use catalog_db::repositories::{MovieRepo, TheaterRepo};
use catalog_db::DbPool;

use crate::error::AppResult;

const ENTITY: &str = "Theater";
const DELETE_CONFLICT: &str = "Cannot delete theater with associated movies";

pub async fn list(pool: &DbPool) -> AppResult<Vec<Theater>> {
    let mut tx = pool.begin().await?;
    let theaters = TheaterRepo::list(&mut *tx).await?;
    tx.commit().await?;
    Ok(theaters)
}

pub async fn get(pool: &DbPool, id: &str) -> AppResult<Theater> {
    let mut tx = pool.begin().await?;
    let theater = TheaterRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tx.commit().await?;
    Ok(theater)
}

pub async fn create(pool: &DbPool, input: CreateTheater) -> AppResult<Theater> {
    validate_input(&input)?;

    let mut tx = catalog_db::begin_write(pool).await?;
    let theater = TheaterRepo::insert(&mut *tx, &input.into_theater(new_id())).await?;
    tx.commit().await?;

    tracing::info!(theater_id = %theater.id, name = %theater.name, "Theater created");
    Ok(theater)
}

/// Apply a partial update. Theaters carry no outbound reference, so there
/// is nothing to check beyond field validity and existence.
pub async fn update(pool: &DbPool, id: &str, patch: UpdateTheater) -> AppResult<Theater> {
    validate_input(&patch)?;

    let mut tx = catalog_db::begin_write(pool).await?;
    let mut theater = TheaterRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    theater.merge(patch);
    let theater = TheaterRepo::update(&mut *tx, &theater)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tx.commit().await?;
    Ok(theater)
}

/// Delete a theater. Refused with a conflict while any movie references it;
/// movies are never removed as a side effect.
pub async fn delete(pool: &DbPool, id: &str) -> AppResult<()> {
    let mut tx = catalog_db::begin_write(pool).await?;

    if !TheaterRepo::exists(&mut *tx, id).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    if MovieRepo::any_for_theater(&mut *tx, id).await? {
        return Err(CoreError::Conflict(DELETE_CONFLICT.into()).into());
    }

    match TheaterRepo::delete(&mut *tx, id).await {
        Ok(_) => {}
        Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
            return Err(CoreError::Conflict(DELETE_CONFLICT.into()).into());
        }
        Err(e) => return Err(e.into()),
    }
    tx.commit().await?;

    tracing::info!(theater_id = %id, "Theater deleted");
    Ok(())
}

/// Movies showing at one theater. An existing theater with no movies yields
/// an empty list, not an error.
pub async fn list_movies(pool: &DbPool, id: &str) -> AppResult<Vec<Movie>> {
    let mut tx = pool.begin().await?;
    if !TheaterRepo::exists(&mut *tx, id).await? {
        return Err(CoreError::not_found(ENTITY, id).into());
    }
    let movies = MovieRepo::list_by_theater(&mut *tx, id).await?;
    tx.commit().await?;
    Ok(movies)
}
