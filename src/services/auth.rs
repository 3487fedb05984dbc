//! Authentication service: registration, login and bearer-token verification

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    error::{AppError, AppResult},
    models::user::{AuthenticatedSession, LoginRequest, RegisterRequest, User},
    repository::Repository,
};

/// Length of the plaintext bearer tokens issued at login
const TOKEN_LENGTH: usize = 48;

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new user. Duplicate emails and malformed payloads surface
    /// as field-level validation errors.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request.validate().map_err(AppError::InvalidPayload)?;

        if self
            .repository
            .users
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            let mut errors = ValidationErrors::new();
            let mut err = ValidationError::new("unique");
            err.message = Some("The email has already been taken.".into());
            errors.add("email", err);
            return Err(AppError::InvalidPayload(errors));
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .repository
            .users
            .create(&request.name, &request.email, &password_hash)
            .await?;

        tracing::info!("Registered user id={} email={}", user.id, user.email);
        Ok(user)
    }

    /// Authenticate by email and password, issuing a fresh opaque bearer token
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthenticatedSession> {
        request.validate().map_err(AppError::InvalidPayload)?;

        let user = self
            .repository
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

        if !verify_password(&user.password, &request.password)? {
            return Err(AppError::Authentication("Invalid credentials".to_string()));
        }

        let token = generate_token();
        self.repository
            .tokens
            .create(user.id, &hash_token(&token))
            .await?;

        tracing::debug!("Issued token for user id={}", user.id);
        Ok(AuthenticatedSession { user, token })
    }

    /// Resolve a presented bearer token to its user. Used by the
    /// AuthenticatedUser extractor on protected routes.
    pub async fn authenticate(&self, token: &str) -> AppResult<User> {
        let user_id = self
            .repository
            .tokens
            .resolve_user_id(&hash_token(token))
            .await?
            .ok_or_else(|| AppError::Authorization("Invalid bearer token".to_string()))?;

        self.repository.users.get_by_id(user_id).await
    }
}

/// Hash a plaintext password with argon2 and a fresh salt
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored argon2 hash
fn verify_password(stored_hash: &str, password: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::Internal(format!("Invalid stored password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Generate a fresh random opaque token
fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Sha256 hex digest of a token, as stored in api_tokens
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("hunter2!").unwrap();
        assert!(verify_password(&hash, "hunter2!").unwrap());
        assert!(!verify_password(&hash, "hunter3!").unwrap());
    }

    #[test]
    fn tokens_are_distinct() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), TOKEN_LENGTH);
        assert_ne!(a, b);
    }

    #[test]
    fn token_hash_is_stable_hex() {
        let digest = hash_token("abc");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, hash_token("abc"));
        assert_ne!(digest, hash_token("abd"));
    }
}
