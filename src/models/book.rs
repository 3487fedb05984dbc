//! Book model and request payload

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Book: belongs to a genre.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub pages: i32,
    pub published_at: NaiveDate,
    pub author: String,
    pub price: Decimal,
    pub genre_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for books. `genre_id` must reference an existing
/// genre; checked in the service before persisting.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
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
    #[validate(required(message = "The pages field is required."))]
    pub pages: Option<i32>,
    #[validate(required(message = "The published at field is required."))]
    pub published_at: Option<NaiveDate>,
    #[validate(
        required(message = "The author field is required."),
        length(min = 1, message = "The author field is required.")
    )]
    pub author: Option<String>,
    #[validate(required(message = "The price field is required."))]
    pub price: Option<Decimal>,
    #[validate(required(message = "The genre id field is required."))]
    pub genre_id: Option<i32>,
}

/// Validated book fields ready for persistence
#[derive(Debug)]
pub struct BookFields {
    pub name: String,
    pub description: String,
    pub pages: i32,
    pub published_at: NaiveDate,
    pub author: String,
    pub price: Decimal,
    pub genre_id: i32,
}

impl BookPayload {
    /// Unwraps the validated fields. Only call after `validate()` succeeded.
    pub fn into_fields(self) -> AppResult<BookFields> {
        match (
            self.name,
            self.description,
            self.pages,
            self.published_at,
            self.author,
            self.price,
            self.genre_id,
        ) {
            (
                Some(name),
                Some(description),
                Some(pages),
                Some(published_at),
                Some(author),
                Some(price),
                Some(genre_id),
            ) => Ok(BookFields {
                name,
                description,
                pages,
                published_at,
                author,
                price,
                genre_id,
            }),
            _ => Err(AppError::Internal(
                "book payload field missing after validation".to_string(),
            )),
        }
    }
}
