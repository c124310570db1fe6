//! Liveness endpoint that also reports how much of the catalog is loaded.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use catalog_db::repositories::{MovieRepo, TheaterRepo};
use catalog_db::DbPool;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database cannot be queried.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Absent when the database is unreachable.
    pub catalog: Option<CatalogCounts>,
}

#[derive(Debug, Serialize)]
pub struct CatalogCounts {
    pub theaters: i64,
    pub movies: i64,
}

async fn catalog_counts(pool: &DbPool) -> Result<CatalogCounts, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    Ok(CatalogCounts {
        theaters: TheaterRepo::count(&mut *conn).await?,
        movies: MovieRepo::count(&mut *conn).await?,
    })
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = match catalog_counts(&state.pool).await {
        Ok(counts) => Some(counts),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read the catalog");
            None
        }
    };
    let db_healthy = catalog.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        catalog,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
