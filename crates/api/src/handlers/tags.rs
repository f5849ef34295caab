//! Handlers for user tags.
//!
//! Tags double as season, occasion, and color labels for the item filters.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use wardrobe_core::error::CoreError;
use wardrobe_core::types::DbId;
use wardrobe_db::models::tag::{CreateTag, UpdateTag};
use wardrobe_db::repositories::TagRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_tag_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Tag name is required".into(),
        )));
    }
    Ok(())
}

/// GET /api/v1/tags
pub async fn list_tags(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tags = TagRepo::list(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// POST /api/v1/tags
///
/// Creating a name that already exists returns the existing tag.
pub async fn create_tag(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<impl IntoResponse> {
    validate_tag_name(&input.name)?;

    let tag = TagRepo::create_or_get(&state.pool, auth.user_id, &input).await?;
    tracing::info!(tag_id = tag.id, user_id = %auth.user_id, "Tag saved");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}

/// PUT /api/v1/tags/{id}
pub async fn update_tag(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(tag_id): Path<DbId>,
    Json(input): Json<UpdateTag>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate_tag_name(name)?;
    }

    let tag = TagRepo::update(&state.pool, auth.user_id, tag_id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Tag", tag_id))?;

    tracing::info!(tag_id, user_id = %auth.user_id, "Tag updated");
    Ok(Json(DataResponse { data: tag }))
}

/// DELETE /api/v1/tags/{id}
///
/// Delete a tag and all its item associations.
pub async fn delete_tag(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(tag_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TagRepo::delete(&state.pool, auth.user_id, tag_id).await?;

    if !deleted {
        return Err(CoreError::not_found("Tag", tag_id).into());
    }

    tracing::info!(tag_id, user_id = %auth.user_id, "Tag deleted");
    Ok(StatusCode::NO_CONTENT)
}
