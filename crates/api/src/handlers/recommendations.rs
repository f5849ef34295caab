//! Handlers for saved outfit advice.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use wardrobe_core::error::CoreError;
use wardrobe_db::models::recommendation::CreateRecommendation;
use wardrobe_db::repositories::RecommendationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/recommendations?limit=
pub async fn list_recommendations(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let saved = RecommendationRepo::list(&state.pool, auth.user_id, params.limit).await?;
    Ok(Json(DataResponse { data: saved }))
}

/// POST /api/v1/recommendations
pub async fn create_recommendation(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateRecommendation>,
) -> AppResult<impl IntoResponse> {
    if input.advice.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Advice text is required".into(),
        )));
    }

    let saved = RecommendationRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(recommendation_id = saved.id, user_id = %auth.user_id, "Recommendation saved");

    Ok((StatusCode::CREATED, Json(DataResponse { data: saved })))
}
