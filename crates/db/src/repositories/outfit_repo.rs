//! Repository for the `outfits` and `outfit_items` tables.

use sqlx::PgPool;
use wardrobe_core::types::{DbId, UserId};

use crate::models::outfit::{CreateOutfit, Outfit};

/// Select list producing an [`Outfit`] from `outfits o`.
const OUTFIT_SELECT: &str = "\
    SELECT o.id, o.user_id, o.profile_id, o.name, o.occasion, o.season, o.notes, \
           COALESCE(( \
               SELECT array_agg(oi.item_id ORDER BY oi.position) \
               FROM outfit_items oi WHERE oi.outfit_id = o.id \
           ), ARRAY[]::BIGINT[]) AS item_ids, \
           o.created_at, o.updated_at \
    FROM outfits o";

pub struct OutfitRepo;

impl OutfitRepo {
    pub async fn list(pool: &PgPool, user_id: UserId) -> Result<Vec<Outfit>, sqlx::Error> {
        let query = format!("{OUTFIT_SELECT} WHERE o.user_id = $1 ORDER BY o.id DESC");
        sqlx::query_as::<_, Outfit>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
    ) -> Result<Option<Outfit>, sqlx::Error> {
        let query = format!("{OUTFIT_SELECT} WHERE o.id = $1 AND o.user_id = $2");
        sqlx::query_as::<_, Outfit>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an outfit and its items (in the given order) in one
    /// transaction. The caller checks item ownership beforehand.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        dto: &CreateOutfit,
    ) -> Result<Outfit, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO outfits (user_id, profile_id, name, occasion, season, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(user_id)
        .bind(dto.profile_id)
        .bind(dto.name.trim())
        .bind(&dto.occasion)
        .bind(&dto.season)
        .bind(&dto.notes)
        .fetch_one(&mut *tx)
        .await?;

        for (position, item_id) in dto.item_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO outfit_items (outfit_id, item_id, position) VALUES ($1, $2, $3) \
                 ON CONFLICT (outfit_id, item_id) DO NOTHING",
            )
            .bind(id)
            .bind(item_id)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Self::find_by_id(pool, user_id, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn delete(pool: &PgPool, user_id: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM outfits WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
