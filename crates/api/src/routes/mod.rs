pub mod health;
pub mod movie;
pub mod theater;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /theaters                     list, create
/// /theaters/{id}                get, update, delete
/// /theaters/{id}/movies         movies showing at a theater
///
/// /movies                       list (?theater_id=), create
/// /movies/{id}                  get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/theaters", theater::router())
        .nest("/movies", movie::router())
}
