//! Handlers for item categories.
//!
//! Built-in categories are shared and read-only; users may add and remove
//! their own.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use wardrobe_core::error::CoreError;
use wardrobe_core::types::DbId;
use wardrobe_db::models::category::CreateCategory;
use wardrobe_db::repositories::{CategoryRepo, WardrobeItemRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list_categories(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_visible(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Category name is required".into(),
        )));
    }

    let category = CategoryRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(category_id = category.id, user_id = %auth.user_id, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// DELETE /api/v1/categories/{id}
///
/// Only the user's own categories, and only while no item references them.
pub async fn delete_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_visible(&state.pool, auth.user_id, category_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Category", category_id))?;

    if category.user_id.is_none() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Built-in categories cannot be deleted".into(),
        )));
    }

    let in_use = WardrobeItemRepo::count_by_category(&state.pool, category_id).await?;
    if in_use > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Category is used by {in_use} item(s)"
        ))));
    }

    CategoryRepo::delete(&state.pool, auth.user_id, category_id).await?;
    tracing::info!(category_id, user_id = %auth.user_id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
