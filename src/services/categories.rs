//! Category management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CategoryPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all categories
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.list().await
    }

    /// Get category by ID
    pub async fn get(&self, id: i32) -> AppResult<Category> {
        self.repository.categories.get_by_id(id).await
    }

    /// Create a new category
    pub async fn create(&self, payload: CategoryPayload) -> AppResult<Category> {
        payload.validate()?;
        let (name, description) = payload.into_fields()?;
        self.repository.categories.create(&name, &description).await
    }

    /// Overwrite an existing category with the provided payload
    pub async fn update(&self, id: i32, payload: CategoryPayload) -> AppResult<Category> {
        // 404 before 422, matching the controller contract
        self.repository.categories.get_by_id(id).await?;
        payload.validate()?;
        let (name, description) = payload.into_fields()?;
        self.repository
            .categories
            .update(id, &name, &description)
            .await
    }

    /// Delete a category. Refused while genres still reference it
    /// (restrict-on-delete policy).
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.categories.get_by_id(id).await?;

        let dependents = self.repository.categories.genre_count(id).await?;
        if dependents > 0 {
            return Err(AppError::Conflict(format!(
                "Category {} has {} dependent genre(s)",
                id, dependents
            )));
        }

        self.repository.categories.delete(id).await
    }
}
