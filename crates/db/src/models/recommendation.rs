//! Saved outfit recommendation model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wardrobe_core::types::{DbId, Timestamp, UserId};

/// A row from the `outfit_recommendations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recommendation {
    pub id: DbId,
    pub user_id: UserId,
    pub prompt: Option<String>,
    pub advice: String,
    /// Weather snapshot the advice was given under, if any.
    pub weather: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecommendation {
    pub prompt: Option<String>,
    pub advice: String,
    pub weather: Option<serde_json::Value>,
}
