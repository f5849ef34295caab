//! Handlers for wardrobe profiles.
//!
//! The owner's main profile is synthesized and always listed first; only
//! additional profiles are stored, up to the plan limit.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use wardrobe_core::error::CoreError;
use wardrobe_core::profile::{
    main_profile, profile_limit_reached, validate_age, validate_profile_name, ProfileSummary,
};
use wardrobe_core::types::DbId;
use wardrobe_db::models::wardrobe_profile::{CreateWardrobeProfile, UpdateWardrobeProfile};
use wardrobe_db::repositories::{AccountRepo, WardrobeProfileRepo};
use wardrobe_upstream::storage::{image_extension, profile_picture_path};

use crate::error::{AppError, AppResult};
use crate::handlers::form::read_image_form;
use crate::handlers::items::remove_object;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn profile_not_found(id: DbId) -> AppError {
    CoreError::not_found("WardrobeProfile", id).into()
}

/// GET /api/v1/profiles
pub async fn list_profiles(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let account = AccountRepo::find(&state.pool, auth.user_id).await?;
    let stored = WardrobeProfileRepo::list(&state.pool, auth.user_id).await?;

    let mut profiles: Vec<ProfileSummary> = Vec::with_capacity(stored.len() + 1);
    profiles.push(main_profile(
        account.as_ref().and_then(|a| a.display_name.as_deref()),
    ));
    profiles.extend(stored.iter().map(|p| p.summary()));

    Ok(Json(DataResponse { data: profiles }))
}

/// POST /api/v1/profiles
pub async fn create_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWardrobeProfile>,
) -> AppResult<impl IntoResponse> {
    validate_profile_name(&input.name)?;
    validate_age(input.age)?;

    let profile = WardrobeProfileRepo::create_within_limit(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(profile_limit_reached)?;
    tracing::info!(profile_id = profile.id, user_id = %auth.user_id, "Wardrobe profile created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: profile.summary(),
        }),
    ))
}

/// PUT /api/v1/profiles/{id}
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
    Json(input): Json<UpdateWardrobeProfile>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate_profile_name(name)?;
    }
    validate_age(input.age)?;

    let profile = WardrobeProfileRepo::update(&state.pool, auth.user_id, profile_id, &input)
        .await?
        .ok_or_else(|| profile_not_found(profile_id))?;

    tracing::info!(profile_id, user_id = %auth.user_id, "Wardrobe profile updated");
    Ok(Json(DataResponse {
        data: profile.summary(),
    }))
}

/// DELETE /api/v1/profiles/{id}
///
/// The profile's items move to the main wardrobe.
pub async fn delete_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let profile = WardrobeProfileRepo::find_by_id(&state.pool, auth.user_id, profile_id)
        .await?
        .ok_or_else(|| profile_not_found(profile_id))?;

    WardrobeProfileRepo::delete(&state.pool, auth.user_id, profile_id).await?;

    if let Some(path) = profile.picture_path.as_deref() {
        remove_object(&state, path).await;
    }

    tracing::info!(profile_id, user_id = %auth.user_id, "Wardrobe profile deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/profiles/{id}/picture
///
/// Multipart with a required `image` part. Unlike item images, a failed
/// upload fails the request since there is no other change to keep.
pub async fn upload_picture(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let upload = read_image_form(multipart).await?;
    let ext = image_extension(&upload.filename)?;

    let existing = WardrobeProfileRepo::find_by_id(&state.pool, auth.user_id, profile_id)
        .await?
        .ok_or_else(|| profile_not_found(profile_id))?;

    let path = profile_picture_path(auth.user_id, profile_id, &ext);
    let stored = state.storage.upload(&upload.bytes, &path).await?;

    let profile = WardrobeProfileRepo::set_picture(
        &state.pool,
        auth.user_id,
        profile_id,
        &stored.url,
        &stored.path,
    )
    .await?
    .ok_or_else(|| profile_not_found(profile_id))?;

    if let Some(old) = existing.picture_path.as_deref() {
        remove_object(&state, old).await;
    }

    tracing::info!(profile_id, user_id = %auth.user_id, "Profile picture updated");
    Ok(Json(DataResponse {
        data: profile.summary(),
    }))
}
