//! Repository for the `theater` table.

use catalog_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::theater::Theater;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, brand, location, operating_hours";

/// Provides CRUD operations for theaters.
pub struct TheaterRepo;

impl TheaterRepo {
    /// Insert a fully formed theater row, returning it as stored.
    pub async fn insert(conn: &mut SqliteConnection, theater: &Theater) -> Result<Theater, sqlx::Error> {
        let query = format!(
            "INSERT INTO theater (id, name, brand, location, operating_hours)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theater>(&query)
            .bind(&theater.id)
            .bind(&theater.name)
            .bind(&theater.brand)
            .bind(&theater.location)
            .bind(&theater.operating_hours)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a theater by id.
    pub async fn find_by_id(conn: &mut SqliteConnection, id: &str) -> Result<Option<Theater>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM theater WHERE id = ?");
        sqlx::query_as::<_, Theater>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Whether a theater with `id` exists.
    pub async fn exists(conn: &mut SqliteConnection, id: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM theater WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.is_some())
    }

    /// List all theaters. Row order is whatever the engine returns.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Theater>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM theater");
        sqlx::query_as::<_, Theater>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// All theater ids, ordered ascending.
    pub async fn list_ids(conn: &mut SqliteConnection) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM theater ORDER BY id")
            .fetch_all(&mut *conn)
            .await
    }

    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM theater")
            .fetch_one(&mut *conn)
            .await
    }

    /// Whether the table holds no rows at all.
    pub async fn is_empty(conn: &mut SqliteConnection) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM theater LIMIT 1")
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.is_none())
    }

    /// Overwrite every mutable column of an existing theater.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(conn: &mut SqliteConnection, theater: &Theater) -> Result<Option<Theater>, sqlx::Error> {
        let query = format!(
            "UPDATE theater SET
                name = ?,
                brand = ?,
                location = ?,
                operating_hours = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theater>(&query)
            .bind(&theater.name)
            .bind(&theater.brand)
            .bind(&theater.location)
            .bind(&theater.operating_hours)
            .bind(&theater.id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Permanently delete a theater by id. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM theater WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
