//! Genre endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::genre::{Genre, GenreDetails, GenrePayload},
};

use super::{ApiJson, ApiResponse, AuthenticatedUser};

/// List all genres with their category and books
#[utoipa::path(
    get,
    path = "/genres",
    tag = "genres",
    responses(
        (status = 200, description = "Genres retrieved successfully", body = ApiResponse<Vec<GenreDetails>>),
        (status = 500, description = "Server error")
    )
)]
pub async fn list_genres(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<GenreDetails>>>> {
    let genres = state.services.genres.list().await?;
    Ok(ApiResponse::ok("Genres retrieved successfully", genres))
}

/// Get a genre by ID
#[utoipa::path(
    get,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre retrieved successfully", body = ApiResponse<Genre>),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Genre>>> {
    let genre = state.services.genres.get(id).await?;
    Ok(ApiResponse::ok("Genre retrieved successfully", genre))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/genres",
    tag = "genres",
    security(("bearer_auth" = [])),
    request_body = GenrePayload,
    responses(
        (status = 201, description = "Genre created successfully", body = ApiResponse<Genre>),
        (status = 403, description = "Not authenticated"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_genre(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ApiJson(payload): ApiJson<GenrePayload>,
) -> AppResult<(StatusCode, Json<ApiResponse<Genre>>)> {
    let genre = state.services.genres.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok("Genre created successfully", genre),
    ))
}

/// Update an existing genre
#[utoipa::path(
    put,
    path = "/genres/{id}",
    tag = "genres",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = GenrePayload,
    responses(
        (status = 200, description = "Genre updated successfully", body = ApiResponse<Genre>),
        (status = 404, description = "Genre not found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_genre(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<GenrePayload>,
) -> AppResult<Json<ApiResponse<Genre>>> {
    let genre = state.services.genres.update(id, payload).await?;
    Ok(ApiResponse::ok("Genre updated successfully", genre))
}

/// Delete a genre
#[utoipa::path(
    delete,
    path = "/genres/{id}",
    tag = "genres",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found"),
        (status = 409, description = "Genre has dependent books")
    )
)]
pub async fn delete_genre(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.genres.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
