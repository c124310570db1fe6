//! Movie entity model and DTOs.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `movie` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub distributor: String,
    pub ticket_price: i64,
    pub runtime_minutes: i64,
    pub genre: String,
    pub theater_id: DbId,
}

/// DTO for creating a new movie. `theater_id` must name an existing theater.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub distributor: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub ticket_price: i64,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub runtime_minutes: i64,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub genre: String,
    pub theater_id: DbId,
}

/// Partial update for a movie. Only `Some` fields are applied; a new
/// `theater_id` is re-validated before anything is written.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub distributor: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub ticket_price: Option<i64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub runtime_minutes: Option<i64>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub genre: Option<String>,
    pub theater_id: Option<DbId>,
}

impl CreateMovie {
    pub fn into_movie(self, id: DbId) -> Movie {
        Movie {
            id,
            title: self.title,
            distributor: self.distributor,
            ticket_price: self.ticket_price,
            runtime_minutes: self.runtime_minutes,
            genre: self.genre,
            theater_id: self.theater_id,
        }
    }
}

impl Movie {
    /// Apply a patch in place, leaving unspecified fields untouched.
    pub fn merge(&mut self, patch: UpdateMovie) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(distributor) = patch.distributor {
            self.distributor = distributor;
        }
        if let Some(ticket_price) = patch.ticket_price {
            self.ticket_price = ticket_price;
        }
        if let Some(runtime_minutes) = patch.runtime_minutes {
            self.runtime_minutes = runtime_minutes;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(theater_id) = patch.theater_id {
            self.theater_id = theater_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_only_patch_keeps_other_fields() {
        let mut movie = Movie {
            id: "m-1".into(),
            title: "Exhuma".into(),
            distributor: "Showbox".into(),
            ticket_price: 13000,
            runtime_minutes: 134,
            genre: "Occult".into(),
            theater_id: "t-1".into(),
        };
        let before = movie.clone();

        movie.merge(UpdateMovie {
            ticket_price: Some(9000),
            ..Default::default()
        });

        assert_eq!(movie.ticket_price, 9000);
        assert_eq!(
            Movie {
                ticket_price: before.ticket_price,
                ..movie
            },
            before
        );
    }
}
