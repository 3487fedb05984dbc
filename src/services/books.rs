//! Book management service

use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get book by ID
    pub async fn get(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a new book after checking the referenced genre exists
    pub async fn create(&self, payload: BookPayload) -> AppResult<Book> {
        payload.validate()?;
        let fields = payload.into_fields()?;
        self.check_genre(fields.genre_id).await?;
        self.repository.books.create(&fields).await
    }

    /// Overwrite an existing book with the provided payload
    pub async fn update(&self, id: i32, payload: BookPayload) -> AppResult<Book> {
        // 404 before 422, matching the controller contract
        self.repository.books.get_by_id(id).await?;
        payload.validate()?;
        let fields = payload.into_fields()?;
        self.check_genre(fields.genre_id).await?;
        self.repository.books.update(id, &fields).await
    }

    /// Delete a book by ID
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.get_by_id(id).await?;
        self.repository.books.delete(id).await
    }

    /// Referential check ahead of the FK constraint, so a dangling genre_id
    /// surfaces as a field-level validation error.
    async fn check_genre(&self, genre_id: i32) -> AppResult<()> {
        if self.repository.genres.exists(genre_id).await? {
            return Ok(());
        }
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("exists");
        err.message = Some(
            format!("The genre id {} does not reference an existing genre.", genre_id).into(),
        );
        errors.add("genre_id", err);
        Err(AppError::Validation(errors))
    }
}
