//! Theater entity model and DTOs.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `theater` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Theater {
    pub id: DbId,
    pub name: String,
    pub brand: String,
    pub location: String,
    pub operating_hours: String,
}

/// DTO for creating a new theater. The id is always generated.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTheater {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub brand: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub operating_hours: String,
}

/// Partial update for a theater. Only `Some` fields are applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTheater {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub brand: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub operating_hours: Option<String>,
}

impl CreateTheater {
    /// Materialise the row this request would insert under `id`.
    pub fn into_theater(self, id: DbId) -> Theater {
        Theater {
            id,
            name: self.name,
            brand: self.brand,
            location: self.location,
            operating_hours: self.operating_hours,
        }
    }
}

impl Theater {
    /// Apply a patch in place, leaving unspecified fields untouched.
    pub fn merge(&mut self, patch: UpdateTheater) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(operating_hours) = patch.operating_hours {
            self.operating_hours = operating_hours;
        }
    }
}
