//! Genres repository for database operations

use std::collections::HashMap;

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        category::Category,
        genre::{Genre, GenreDetails, GenreFields},
    },
};

#[derive(Clone)]
pub struct GenresRepository {
    pool: Pool<Postgres>,
}

impl GenresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all genres, each enriched with its category and books
    pub async fn list_with_relations(&self) -> AppResult<Vec<GenreDetails>> {
        let genres = sqlx::query_as::<_, Genre>("SELECT * FROM genres ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories")
            .fetch_all(&self.pool)
            .await?;
        let categories: HashMap<i32, Category> =
            categories.into_iter().map(|c| (c.id, c)).collect();

        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        let mut books_by_genre: HashMap<i32, Vec<Book>> = HashMap::new();
        for book in books {
            books_by_genre.entry(book.genre_id).or_default().push(book);
        }

        let mut result = Vec::with_capacity(genres.len());
        for genre in genres {
            let category = categories.get(&genre.category_id).cloned().ok_or_else(|| {
                AppError::Internal(format!(
                    "genre {} references missing category {}",
                    genre.id, genre.category_id
                ))
            })?;
            let books = books_by_genre.remove(&genre.id).unwrap_or_default();
            result.push(GenreDetails {
                genre,
                category,
                books,
            });
        }

        Ok(result)
    }

    /// Get genre by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("SELECT * FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))
    }

    /// True if a genre with this id exists
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM genres WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Insert a new genre
    pub async fn create(&self, fields: &GenreFields) -> AppResult<Genre> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (name, description, category_id, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.category_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(genre)
    }

    /// Overwrite all fields of an existing genre
    pub async fn update(&self, id: i32, fields: &GenreFields) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>(
            r#"
            UPDATE genres
            SET name = $2, description = $3, category_id = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.category_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))
    }

    /// Delete a genre by ID
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let deleted =
            sqlx::query_scalar::<_, i32>("DELETE FROM genres WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        deleted
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))
    }

    /// Number of books referencing this genre
    pub async fn book_count(&self, id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE genre_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
