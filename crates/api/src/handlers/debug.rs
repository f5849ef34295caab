//! Diagnostic listing of a user's most recent items.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use wardrobe_core::types::UserId;
use wardrobe_db::repositories::WardrobeItemRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of items returned.
const DEBUG_ITEM_LIMIT: i64 = 3;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugParams {
    pub user_id: Option<UserId>,
}

/// GET /api/v1/debug-wardrobe?userId=
pub async fn debug_wardrobe(
    State(state): State<AppState>,
    Query(params): Query<DebugParams>,
) -> AppResult<impl IntoResponse> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::BadRequest("userId is required".into()))?;

    let items = WardrobeItemRepo::list_recent(&state.pool, user_id, DEBUG_ITEM_LIMIT).await?;
    tracing::debug!(user_id = %user_id, count = items.len(), "Debug wardrobe listing");

    Ok(Json(DataResponse { data: items }))
}
