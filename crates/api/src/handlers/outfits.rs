//! Handlers for saved outfits.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use wardrobe_core::error::CoreError;
use wardrobe_core::types::DbId;
use wardrobe_db::models::outfit::CreateOutfit;
use wardrobe_db::repositories::{OutfitRepo, WardrobeItemRepo, WardrobeProfileRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/outfits
pub async fn list_outfits(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let outfits = OutfitRepo::list(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: outfits }))
}

/// POST /api/v1/outfits
///
/// Every item must belong to the caller. Repeated ids keep their first
/// position.
pub async fn create_outfit(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateOutfit>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Outfit name is required".into(),
        )));
    }

    let mut seen = std::collections::HashSet::new();
    input.item_ids.retain(|id| seen.insert(*id));
    if input.item_ids.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "An outfit needs at least one item".into(),
        )));
    }

    let owned = WardrobeItemRepo::count_owned(&state.pool, auth.user_id, &input.item_ids).await?;
    if owned != input.item_ids.len() as i64 {
        return Err(AppError::Core(CoreError::Validation(
            "Outfit references unknown items".into(),
        )));
    }

    if let Some(profile_id) = input.profile_id {
        WardrobeProfileRepo::find_by_id(&state.pool, auth.user_id, profile_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!(
                    "Unknown profile {profile_id}"
                )))
            })?;
    }

    let outfit = OutfitRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(
        outfit_id = outfit.id,
        items = outfit.item_ids.len(),
        user_id = %auth.user_id,
        "Outfit created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: outfit })))
}

/// DELETE /api/v1/outfits/{id}
pub async fn delete_outfit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(outfit_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = OutfitRepo::delete(&state.pool, auth.user_id, outfit_id).await?;
    if !deleted {
        return Err(CoreError::not_found("Outfit", outfit_id).into());
    }

    tracing::info!(outfit_id, user_id = %auth.user_id, "Outfit deleted");
    Ok(StatusCode::NO_CONTENT)
}
