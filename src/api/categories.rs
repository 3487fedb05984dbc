//! Category endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::category::{Category, CategoryPayload},
};

use super::{ApiJson, ApiResponse, AuthenticatedUser};

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Categories retrieved successfully", body = ApiResponse<Vec<Category>>),
        (status = 500, description = "Server error")
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = state.services.categories.list().await?;
    Ok(ApiResponse::ok(
        "Categories retrieved successfully",
        categories,
    ))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category retrieved successfully", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = state.services.categories.get(id).await?;
    Ok(ApiResponse::ok("Category retrieved successfully", category))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    security(("bearer_auth" = [])),
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Category created successfully", body = ApiResponse<Category>),
        (status = 403, description = "Not authenticated"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ApiJson(payload): ApiJson<CategoryPayload>,
) -> AppResult<(StatusCode, Json<ApiResponse<Category>>)> {
    let category = state.services.categories.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok("Category created successfully", category),
    ))
}

/// Update an existing category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category updated successfully", body = ApiResponse<Category>),
        (status = 404, description = "Category not found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<CategoryPayload>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = state.services.categories.update(id, payload).await?;
    Ok(ApiResponse::ok("Category updated successfully", category))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category has dependent genres")
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
