//! Repository for the `wardrobe_profiles` table.
//!
//! Only stored profiles live here; the owner's main profile is synthesized
//! by the caller.

use sqlx::PgPool;
use wardrobe_core::profile::has_profile_capacity;
use wardrobe_core::types::{DbId, UserId};

use crate::models::wardrobe_profile::{
    CreateWardrobeProfile, UpdateWardrobeProfile, WardrobeProfile,
};

const COLUMNS: &str = "\
    id, user_id, name, relation, age, picture_url, picture_path, \
    created_at, updated_at";

pub struct WardrobeProfileRepo;

impl WardrobeProfileRepo {
    /// List a user's profiles in creation order.
    pub async fn list(pool: &PgPool, user_id: UserId) -> Result<Vec<WardrobeProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wardrobe_profiles WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, WardrobeProfile>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
    ) -> Result<Option<WardrobeProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wardrobe_profiles WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, WardrobeProfile>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a profile unless the user is already at the profile limit.
    ///
    /// The count and the insert run in one transaction holding a lock on the
    /// user's `account_profiles` row, so concurrent creates are serialized.
    /// Returns `None` when the limit is reached.
    pub async fn create_within_limit(
        pool: &PgPool,
        user_id: UserId,
        dto: &CreateWardrobeProfile,
    ) -> Result<Option<WardrobeProfile>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO account_profiles (user_id) VALUES ($1) \
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
        sqlx::query("SELECT user_id FROM account_profiles WHERE user_id = $1 FOR UPDATE")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let existing: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM wardrobe_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;
        if !has_profile_capacity(existing) {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO wardrobe_profiles (user_id, name, relation, age) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let profile = sqlx::query_as::<_, WardrobeProfile>(&query)
            .bind(user_id)
            .bind(dto.name.trim())
            .bind(&dto.relation)
            .bind(dto.age)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(profile))
    }

    /// Partially update a profile. Uses `COALESCE` so only provided fields change.
    pub async fn update(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
        dto: &UpdateWardrobeProfile,
    ) -> Result<Option<WardrobeProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE wardrobe_profiles SET \
                 name = COALESCE($3, name), \
                 relation = COALESCE($4, relation), \
                 age = COALESCE($5, age) \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WardrobeProfile>(&query)
            .bind(id)
            .bind(user_id)
            .bind(dto.name.as_deref().map(str::trim))
            .bind(&dto.relation)
            .bind(dto.age)
            .fetch_optional(pool)
            .await
    }

    /// Point the profile at a newly uploaded picture.
    pub async fn set_picture(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
        url: &str,
        path: &str,
    ) -> Result<Option<WardrobeProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE wardrobe_profiles SET picture_url = $3, picture_path = $4 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WardrobeProfile>(&query)
            .bind(id)
            .bind(user_id)
            .bind(url)
            .bind(path)
            .fetch_optional(pool)
            .await
    }

    /// Delete a profile. Its items fall back to the main wardrobe through
    /// `ON DELETE SET NULL`. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, user_id: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wardrobe_profiles WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
