//! Repository for the `account_profiles` table.

use sqlx::PgPool;
use wardrobe_core::types::UserId;

use crate::models::account::{AccountProfile, UpsertAccountProfile};

const COLUMNS: &str = "user_id, display_name, plan, created_at, updated_at";

pub struct AccountRepo;

impl AccountRepo {
    pub async fn find(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<AccountProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM account_profiles WHERE user_id = $1");
        sqlx::query_as::<_, AccountProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update the caller's account profile.
    pub async fn upsert(
        pool: &PgPool,
        user_id: UserId,
        dto: &UpsertAccountProfile,
    ) -> Result<AccountProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO account_profiles (user_id, display_name) VALUES ($1, $2) \
             ON CONFLICT (user_id) DO UPDATE SET display_name = EXCLUDED.display_name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AccountProfile>(&query)
            .bind(user_id)
            .bind(&dto.display_name)
            .fetch_one(pool)
            .await
    }
}
