//! Repository for the `categories` table.
//!
//! Built-in categories (`user_id IS NULL`) are visible to everyone and
//! cannot be deleted through this API.

use sqlx::PgPool;
use wardrobe_core::types::{DbId, UserId};

use crate::models::category::{Category, CreateCategory};

const COLUMNS: &str = "id, user_id, name, description, icon, created_at, updated_at";

pub struct CategoryRepo;

impl CategoryRepo {
    /// Built-ins plus the user's own categories, by name.
    pub async fn list_visible(pool: &PgPool, user_id: UserId) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories \
             WHERE user_id IS NULL OR user_id = $1 \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a category the user may reference.
    pub async fn find_visible(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories \
             WHERE id = $1 AND (user_id IS NULL OR user_id = $2)"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        dto: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (user_id, name, description, icon) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .bind(dto.name.trim())
            .bind(&dto.description)
            .bind(&dto.icon)
            .fetch_one(pool)
            .await
    }

    /// Delete one of the user's own categories. Returns `true` if a row was
    /// deleted.
    pub async fn delete(pool: &PgPool, user_id: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
