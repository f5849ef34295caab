//! Age-appropriate item form options.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use wardrobe_core::age_profile::form_options;
use wardrobe_core::error::CoreError;
use wardrobe_core::profile::ProfileScope;
use wardrobe_db::repositories::WardrobeProfileRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AgeParams {
    pub age: Option<u32>,
}

/// GET /api/v1/form-options?age=
///
/// Options for an arbitrary age; no age means adult.
pub async fn options_for_age(
    _auth: AuthUser,
    Query(params): Query<AgeParams>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: form_options(params.age),
    }))
}

/// GET /api/v1/profiles/{profile}/form-options
///
/// `profile` is `main` or a stored profile id.
pub async fn options_for_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(profile): Path<String>,
) -> AppResult<impl IntoResponse> {
    let age = match ProfileScope::parse(&profile)? {
        ProfileScope::Main => None,
        ProfileScope::Profile(id) => {
            let stored = WardrobeProfileRepo::find_by_id(&state.pool, auth.user_id, id)
                .await?
                .ok_or_else(|| CoreError::not_found("WardrobeProfile", id))?;
            stored.age.and_then(|a| u32::try_from(a).ok())
        }
    };

    Ok(Json(DataResponse {
        data: form_options(age),
    }))
}
