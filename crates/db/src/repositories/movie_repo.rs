//! Repository for the `movie` table.

use sqlx::SqliteConnection;

use crate::models::movie::Movie;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, distributor, ticket_price, runtime_minutes, genre, theater_id";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a fully formed movie row, returning it as stored.
    ///
    /// The foreign key on `theater_id` is enforced by the engine; callers are
    /// still expected to check the reference first for a clean error.
    pub async fn insert(conn: &mut SqliteConnection, movie: &Movie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (id, title, distributor, ticket_price, runtime_minutes, genre, theater_id)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&movie.id)
            .bind(&movie.title)
            .bind(&movie.distributor)
            .bind(movie.ticket_price)
            .bind(movie.runtime_minutes)
            .bind(&movie.genre)
            .bind(&movie.theater_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a movie by id.
    pub async fn find_by_id(conn: &mut SqliteConnection, id: &str) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List all movies.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie");
        sqlx::query_as::<_, Movie>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// List the movies showing at one theater.
    pub async fn list_by_theater(
        conn: &mut SqliteConnection,
        theater_id: &str,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE theater_id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(theater_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Whether any movie references the given theater.
    pub async fn any_for_theater(conn: &mut SqliteConnection, theater_id: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM movie WHERE theater_id = ? LIMIT 1")
            .bind(theater_id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.is_some())
    }

    pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movie")
            .fetch_one(&mut *conn)
            .await
    }

    /// Whether the table holds no rows at all.
    pub async fn is_empty(conn: &mut SqliteConnection) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM movie LIMIT 1")
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.is_none())
    }

    /// Overwrite every mutable column of an existing movie.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(conn: &mut SqliteConnection, movie: &Movie) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movie SET
                title = ?,
                distributor = ?,
                ticket_price = ?,
                runtime_minutes = ?,
                genre = ?,
                theater_id = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&movie.title)
            .bind(&movie.distributor)
            .bind(movie.ticket_price)
            .bind(movie.runtime_minutes)
            .bind(&movie.genre)
            .bind(&movie.theater_id)
            .bind(&movie.id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Permanently delete a movie by id. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
