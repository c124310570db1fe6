//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_db::models::movie::{CreateMovie, Movie, UpdateMovie};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::MovieListParams;
use crate::services::movie as service;
use crate::state::AppState;

/// POST /movies
///
/// Responds 422 when `theater_id` does not name an existing theater.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = service::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies?theater_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = service::list(&state.pool, params.theater_filter()).await?;
    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let movie = service::get(&state.pool, &id).await?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    let movie = service::update(&state.pool, &id, input).await?;
    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    service::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
