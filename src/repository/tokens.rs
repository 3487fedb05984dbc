//! API tokens repository
//!
//! Stores only the sha256 hash of each issued bearer token; the plaintext is
//! returned to the client once at login and never persisted.

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

#[derive(Clone)]
pub struct TokensRepository {
    pool: Pool<Postgres>,
}

impl TokensRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Store the hash of a freshly issued token for a user
    pub async fn create(&self, user_id: i32, token_hash: &str) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO api_tokens (user_id, token_hash, created_at)
            VALUES ($1, $2, NOW())
            "#,
        )
        .bind(user_id)
        .bind(token_hash)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Resolve a token hash to its owning user id, touching last_used_at.
    /// Returns None for unknown tokens.
    pub async fn resolve_user_id(&self, token_hash: &str) -> AppResult<Option<i32>> {
        let user_id = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE api_tokens
            SET last_used_at = NOW()
            WHERE token_hash = $1
            RETURNING user_id
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user_id)
    }
}
