//! Route definitions for the `/theaters` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::theater;
use crate::state::AppState;

/// Routes mounted at `/theaters`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/movies    -> list_movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(theater::list).post(theater::create))
        .route(
            "/{id}",
            get(theater::get_by_id)
                .put(theater::update)
                .delete(theater::delete),
        )
        .route("/{id}/movies", get(theater::list_movies))
}
