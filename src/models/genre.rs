//! Genre model and request payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{book::Book, category::Category};

/// Genre: belongs to a category, has many books.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Genre {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Genre enriched with its category and books, returned by the genre listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenreDetails {
    #[serde(flatten)]
    pub genre: Genre,
    pub category: Category,
    pub books: Vec<Book>,
}

/// Create/update payload for genres. `category_id` must reference an existing
/// category; checked in the service before persisting.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenrePayload {
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, message = "The name field is required.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "The description field is required."),
        length(min = 1, message = "The description field is required.")
    )]
    pub description: Option<String>,
    #[validate(required(message = "The category id field is required."))]
    pub category_id: Option<i32>,
}

/// Validated genre fields ready for persistence
#[derive(Debug)]
pub struct GenreFields {
    pub name: String,
    pub description: String,
    pub category_id: i32,
}

impl GenrePayload {
    /// Unwraps the validated fields. Only call after `validate()` succeeded.
    pub fn into_fields(self) -> AppResult<GenreFields> {
        match (self.name, self.description, self.category_id) {
            (Some(name), Some(description), Some(category_id)) => Ok(GenreFields {
                name,
                description,
                category_id,
            }),
            _ => Err(AppError::Internal(
                "genre payload field missing after validation".to_string(),
            )),
        }
    }
}
