//! Genre management service

use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    error::{AppError, AppResult},
    models::genre::{Genre, GenreDetails, GenrePayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all genres with their category and books
    pub async fn list(&self) -> AppResult<Vec<GenreDetails>> {
        self.repository.genres.list_with_relations().await
    }

    /// Get genre by ID
    pub async fn get(&self, id: i32) -> AppResult<Genre> {
        self.repository.genres.get_by_id(id).await
    }

    /// Create a new genre after checking the referenced category exists
    pub async fn create(&self, payload: GenrePayload) -> AppResult<Genre> {
        payload.validate()?;
        let fields = payload.into_fields()?;
        self.check_category(fields.category_id).await?;
        self.repository.genres.create(&fields).await
    }

    /// Overwrite an existing genre with the provided payload
    pub async fn update(&self, id: i32, payload: GenrePayload) -> AppResult<Genre> {
        // 404 before 422, matching the controller contract
        self.repository.genres.get_by_id(id).await?;
        payload.validate()?;
        let fields = payload.into_fields()?;
        self.check_category(fields.category_id).await?;
        self.repository.genres.update(id, &fields).await
    }

    /// Delete a genre. Refused while books still reference it
    /// (restrict-on-delete policy).
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.genres.get_by_id(id).await?;

        let dependents = self.repository.genres.book_count(id).await?;
        if dependents > 0 {
            return Err(AppError::Conflict(format!(
                "Genre {} has {} dependent book(s)",
                id, dependents
            )));
        }

        self.repository.genres.delete(id).await
    }

    /// Referential check ahead of the FK constraint, so a dangling
    /// category_id surfaces as a field-level validation error.
    async fn check_category(&self, category_id: i32) -> AppResult<()> {
        if self.repository.categories.exists(category_id).await? {
            return Ok(());
        }
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("exists");
        err.message = Some(
            format!("The category id {} does not reference an existing category.", category_id)
                .into(),
        );
        errors.add("category_id", err);
        Err(AppError::Validation(errors))
    }
}
