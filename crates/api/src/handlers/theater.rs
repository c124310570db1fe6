//! Handlers for the `/theaters` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_db::models::movie::Movie;
use catalog_db::models::theater::{CreateTheater, Theater, UpdateTheater};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::services::theater as service;
use crate::state::AppState;

/// POST /theaters
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTheater>,
) -> AppResult<(StatusCode, Json<Theater>)> {
    let theater = service::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(theater)))
}

/// GET /theaters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Theater>>> {
    let theaters = service::list(&state.pool).await?;
    Ok(Json(theaters))
}

/// GET /theaters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Theater>> {
    let theater = service::get(&state.pool, &id).await?;
    Ok(Json(theater))
}

/// PUT /theaters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateTheater>,
) -> AppResult<Json<Theater>> {
    let theater = service::update(&state.pool, &id, input).await?;
    Ok(Json(theater))
}

/// DELETE /theaters/{id}
///
/// Responds 409 while any movie still references the theater.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    service::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /theaters/{id}/movies
pub async fn list_movies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = service::list_movies(&state.pool, &id).await?;
    Ok(Json(movies))
}
