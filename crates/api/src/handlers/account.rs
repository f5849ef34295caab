//! Handlers for the caller's account profile.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use wardrobe_db::models::account::UpsertAccountProfile;
use wardrobe_db::repositories::AccountRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/account
///
/// Creates the row on first access.
pub async fn get_account(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let account = match AccountRepo::find(&state.pool, auth.user_id).await? {
        Some(account) => account,
        None => {
            let empty = UpsertAccountProfile { display_name: None };
            AccountRepo::upsert(&state.pool, auth.user_id, &empty).await?
        }
    };
    Ok(Json(DataResponse { data: account }))
}

/// PUT /api/v1/account
pub async fn update_account(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertAccountProfile>,
) -> AppResult<impl IntoResponse> {
    let input = UpsertAccountProfile {
        display_name: input
            .display_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
    };
    let account = AccountRepo::upsert(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = %auth.user_id, "Account profile updated");
    Ok(Json(DataResponse { data: account }))
}
