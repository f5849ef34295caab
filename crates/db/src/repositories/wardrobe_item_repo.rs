//! Repository for the `wardrobe_items` and `wardrobe_item_tags` tables.
//!
//! Every query is scoped by `user_id`; an id belonging to another user
//! behaves exactly like a missing id.

use chrono::NaiveDate;
use sqlx::PgPool;
use wardrobe_core::item::WardrobeItem;
use wardrobe_core::profile::ProfileScope;
use wardrobe_core::types::{DbId, UserId};

use crate::models::wardrobe_item::{CreateWardrobeItem, ItemDigest, WardrobeItemRow};

/// Select list producing a [`WardrobeItemRow`]. Expects `wardrobe_items i`
/// left-joined to `categories c`.
const ITEM_SELECT: &str = "\
    SELECT i.id, i.user_id, i.profile_id, i.category_id, c.name AS category_name, \
           i.name, i.description, i.brand, i.color, i.size, i.price, i.purchase_date, \
           i.condition, i.is_favorite, i.wear_count, i.last_worn, i.image_url, \
           i.image_path, i.created_at, \
           COALESCE(( \
               SELECT jsonb_agg(jsonb_build_object('tag', jsonb_build_object( \
                          'id', t.id, 'name', t.name, 'color', t.color)) ORDER BY t.name) \
               FROM wardrobe_item_tags it \
               JOIN tags t ON t.id = it.tag_id \
               WHERE it.item_id = i.id \
           ), '[]'::jsonb) AS tags \
    FROM wardrobe_items i \
    LEFT JOIN categories c ON c.id = i.category_id";

/// Provides data access for wardrobe items.
pub struct WardrobeItemRepo;

impl WardrobeItemRepo {
    /// List a user's items, newest first.
    ///
    /// `scope = None` returns every item; `Some(Main)` only items without a
    /// profile; `Some(Profile(id))` only that profile's items.
    pub async fn list(
        pool: &PgPool,
        user_id: UserId,
        scope: Option<ProfileScope>,
    ) -> Result<Vec<WardrobeItem>, sqlx::Error> {
        let query = format!(
            "{ITEM_SELECT} \
             WHERE i.user_id = $1 \
               AND ($2 = FALSE OR i.profile_id IS NOT DISTINCT FROM $3) \
             ORDER BY i.id DESC"
        );
        let rows = sqlx::query_as::<_, WardrobeItemRow>(&query)
            .bind(user_id)
            .bind(scope.is_some())
            .bind(scope.and_then(|s| s.profile_id()))
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(WardrobeItemRow::into_item).collect())
    }

    /// Most recent items for a user, lightweight projection.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: UserId,
        limit: i64,
    ) -> Result<Vec<ItemDigest>, sqlx::Error> {
        sqlx::query_as::<_, ItemDigest>(
            "SELECT i.id, i.name, i.profile_id, c.name AS category_name, i.created_at \
             FROM wardrobe_items i \
             LEFT JOIN categories c ON c.id = i.category_id \
             WHERE i.user_id = $1 \
             ORDER BY i.id DESC \
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
    ) -> Result<Option<WardrobeItem>, sqlx::Error> {
        let query = format!("{ITEM_SELECT} WHERE i.id = $1 AND i.user_id = $2");
        let row = sqlx::query_as::<_, WardrobeItemRow>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(WardrobeItemRow::into_item))
    }

    /// Insert an item and its tag links in one transaction.
    ///
    /// Tag ids that do not belong to the user are ignored.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        dto: &CreateWardrobeItem,
    ) -> Result<WardrobeItem, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO wardrobe_items \
                 (user_id, profile_id, category_id, name, description, brand, color, size, \
                  price, purchase_date, condition, is_favorite) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING id",
        )
        .bind(user_id)
        .bind(dto.profile_id)
        .bind(dto.category_id)
        .bind(dto.name.trim())
        .bind(&dto.description)
        .bind(&dto.brand)
        .bind(&dto.color)
        .bind(&dto.size)
        .bind(dto.price)
        .bind(dto.purchase_date)
        .bind(dto.condition.map(|c| c.as_str()))
        .bind(dto.is_favorite)
        .fetch_one(&mut *tx)
        .await?;

        if !dto.tag_ids.is_empty() {
            sqlx::query(
                "INSERT INTO wardrobe_item_tags (item_id, tag_id) \
                 SELECT $1, t.id FROM tags t WHERE t.user_id = $2 AND t.id = ANY($3) \
                 ON CONFLICT (item_id, tag_id) DO NOTHING",
            )
            .bind(id)
            .bind(user_id)
            .bind(&dto.tag_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Self::find_by_id(pool, user_id, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Write every mutable column of `item` back. Last write wins.
    ///
    /// Returns the re-read item (with a fresh category name), or `None` if
    /// it no longer exists.
    pub async fn save(
        pool: &PgPool,
        item: &WardrobeItem,
    ) -> Result<Option<WardrobeItem>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE wardrobe_items SET \
                 profile_id = $3, category_id = $4, name = $5, description = $6, \
                 brand = $7, color = $8, size = $9, price = $10, purchase_date = $11, \
                 condition = $12, is_favorite = $13, wear_count = $14, last_worn = $15, \
                 image_url = $16, image_path = $17 \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(item.id)
        .bind(item.user_id)
        .bind(item.profile_id)
        .bind(item.category_id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.brand)
        .bind(&item.color)
        .bind(&item.size)
        .bind(item.price)
        .bind(item.purchase_date)
        .bind(item.condition.map(|c| c.as_str()))
        .bind(item.is_favorite)
        .bind(item.wear_count)
        .bind(item.last_worn)
        .bind(&item.image_url)
        .bind(&item.image_path)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, item.user_id, item.id).await
    }

    /// Flip the favorite flag.
    pub async fn toggle_favorite(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
    ) -> Result<Option<WardrobeItem>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE wardrobe_items SET is_favorite = NOT is_favorite \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, user_id, id).await
    }

    /// Increment the wear count and stamp the last-worn date.
    pub async fn record_wear(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
        day: NaiveDate,
    ) -> Result<Option<WardrobeItem>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE wardrobe_items SET wear_count = wear_count + 1, last_worn = $3 \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .bind(day)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, user_id, id).await
    }

    /// Replace the item's tag set. Foreign tag ids are ignored.
    pub async fn set_tags(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
        tag_ids: &[DbId],
    ) -> Result<Option<WardrobeItem>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let owned: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM wardrobe_items WHERE id = $1 AND user_id = $2 FOR UPDATE")
                .bind(id)
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;
        if owned.is_none() {
            return Ok(None);
        }

        sqlx::query("DELETE FROM wardrobe_item_tags WHERE item_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let inserted = sqlx::query(
            "INSERT INTO wardrobe_item_tags (item_id, tag_id) \
             SELECT $1, t.id FROM tags t WHERE t.user_id = $2 AND t.id = ANY($3) \
             ON CONFLICT (item_id, tag_id) DO NOTHING",
        )
        .bind(id)
        .bind(user_id)
        .bind(tag_ids)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        if inserted < tag_ids.len() as u64 {
            tracing::debug!(
                item_id = id,
                requested = tag_ids.len(),
                inserted,
                "Some tag ids were skipped (unknown, foreign, or repeated)"
            );
        }

        Self::find_by_id(pool, user_id, id).await
    }

    /// Delete an item. Returns the deleted row's image path so the caller
    /// can remove the stored object, or `None` if nothing was deleted.
    pub async fn delete(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
    ) -> Result<Option<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>(
            "DELETE FROM wardrobe_items WHERE id = $1 AND user_id = $2 RETURNING image_path",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Count items that reference `category_id`.
    pub async fn count_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM wardrobe_items WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    /// Count how many of `ids` belong to the user.
    pub async fn count_owned(
        pool: &PgPool,
        user_id: UserId,
        ids: &[DbId],
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(DISTINCT id) FROM wardrobe_items WHERE user_id = $1 AND id = ANY($2)",
        )
        .bind(user_id)
        .bind(ids)
        .fetch_one(pool)
        .await
    }
}
