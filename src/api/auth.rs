//! Authentication endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::user::{AuthenticatedSession, LoginRequest, RegisterRequest, User},
};

use super::{ApiJson, ApiResponse};

/// Register a new user account
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = ApiResponse<User>),
        (status = 400, description = "Validation failed (including duplicate email)")
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let user = state.services.auth.register(request).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok("Registration successful", user),
    ))
}

/// Log in with email and password, receiving an opaque bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthenticatedSession>),
        (status = 401, description = "Invalid credentials"),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthenticatedSession>>> {
    let session = state.services.auth.login(request).await?;
    Ok(ApiResponse::ok("Login successful", session))
}
