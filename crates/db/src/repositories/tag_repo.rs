//! Repository for the `tags` table.

use sqlx::PgPool;
use wardrobe_core::types::{DbId, UserId};

use crate::models::tag::{CreateTag, Tag, UpdateTag};

const COLUMNS: &str = "id, user_id, name, color, created_at, updated_at";

/// Provides data access for user tags.
pub struct TagRepo;

impl TagRepo {
    pub async fn list(pool: &PgPool, user_id: UserId) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE user_id = $1 ORDER BY name");
        sqlx::query_as::<_, Tag>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Create a tag, or return the existing one with the same name.
    ///
    /// A provided color overwrites the stored one; `None` keeps it.
    pub async fn create_or_get(
        pool: &PgPool,
        user_id: UserId,
        dto: &CreateTag,
    ) -> Result<Tag, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (user_id, name, color) VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, name) DO UPDATE SET \
                 color = COALESCE(EXCLUDED.color, tags.color) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(user_id)
            .bind(dto.name.trim())
            .bind(&dto.color)
            .fetch_one(pool)
            .await
    }

    /// Partially update a tag. Uses `COALESCE` so only provided fields change.
    pub async fn update(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
        dto: &UpdateTag,
    ) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!(
            "UPDATE tags SET \
                 name = COALESCE($3, name), \
                 color = COALESCE($4, color) \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .bind(user_id)
            .bind(dto.name.as_deref().map(str::trim))
            .bind(&dto.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tag and (by cascade) its item links.
    pub async fn delete(pool: &PgPool, user_id: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
