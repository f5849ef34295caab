//! Repository for the `outfit_recommendations` table.

use sqlx::PgPool;
use wardrobe_core::types::UserId;

use crate::models::recommendation::{CreateRecommendation, Recommendation};

const COLUMNS: &str = "id, user_id, prompt, advice, weather, created_at";

/// Default number of recommendations returned by `list`.
pub const DEFAULT_LIMIT: i64 = 20;

/// Upper bound on `list` results.
pub const MAX_LIMIT: i64 = 100;

pub struct RecommendationRepo;

impl RecommendationRepo {
    /// Most recent first. `limit` is clamped to `1..=MAX_LIMIT`.
    pub async fn list(
        pool: &PgPool,
        user_id: UserId,
        limit: Option<i64>,
    ) -> Result<Vec<Recommendation>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM outfit_recommendations \
             WHERE user_id = $1 ORDER BY created_at DESC, id DESC LIMIT $2"
        );
        sqlx::query_as::<_, Recommendation>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        dto: &CreateRecommendation,
    ) -> Result<Recommendation, sqlx::Error> {
        let query = format!(
            "INSERT INTO outfit_recommendations (user_id, prompt, advice, weather) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recommendation>(&query)
            .bind(user_id)
            .bind(&dto.prompt)
            .bind(&dto.advice)
            .bind(&dto.weather)
            .fetch_one(pool)
            .await
    }
}
