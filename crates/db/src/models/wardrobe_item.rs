//! Wardrobe item row, conversion to the domain item, and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wardrobe_core::item::{Condition, WardrobeItem};
use wardrobe_core::tag_shape::tags_from_json;
use wardrobe_core::types::{DbId, Timestamp, UserId};

/// A row from `wardrobe_items` joined with its category name and its tag
/// associations (aggregated as JSON in the join-row shape).
#[derive(Debug, Clone, FromRow)]
pub struct WardrobeItemRow {
    pub id: DbId,
    pub user_id: UserId,
    pub profile_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub condition: Option<String>,
    pub is_favorite: bool,
    pub wear_count: i32,
    pub last_worn: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub image_path: Option<String>,
    pub created_at: Timestamp,
    pub tags: serde_json::Value,
}

impl WardrobeItemRow {
    /// Convert to the domain item. Unknown condition strings become `None`
    /// and malformed tag entries are dropped.
    pub fn into_item(self) -> WardrobeItem {
        WardrobeItem {
            id: self.id,
            user_id: self.user_id,
            profile_id: self.profile_id,
            name: self.name,
            description: self.description,
            brand: self.brand,
            color: self.color,
            size: self.size,
            price: self.price,
            purchase_date: self.purchase_date,
            category_id: self.category_id,
            category_name: self.category_name,
            condition: self
                .condition
                .as_deref()
                .and_then(|c| Condition::from_str_value(c).ok()),
            is_favorite: self.is_favorite,
            wear_count: self.wear_count,
            last_worn: self.last_worn,
            image_url: self.image_url,
            image_path: self.image_path,
            created_at: self.created_at,
            tags: tags_from_json(&self.tags),
        }
    }
}

/// DTO for creating an item (the `item` part of the create form).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWardrobeItem {
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub category_id: Option<DbId>,
    pub condition: Option<Condition>,
    #[serde(default)]
    pub is_favorite: bool,
    /// `None` puts the item in the main wardrobe.
    pub profile_id: Option<DbId>,
    #[serde(default)]
    pub tag_ids: Vec<DbId>,
}

/// Minimal item projection for the diagnostic listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemDigest {
    pub id: DbId,
    pub name: String,
    pub profile_id: Option<DbId>,
    pub category_name: Option<String>,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(condition: Option<&str>, tags: serde_json::Value) -> WardrobeItemRow {
        WardrobeItemRow {
            id: 1,
            user_id: uuid::Uuid::nil(),
            profile_id: None,
            category_id: Some(1),
            category_name: Some("tops".into()),
            name: "Shirt".into(),
            description: None,
            brand: None,
            color: None,
            size: None,
            price: Some(10.0),
            purchase_date: None,
            condition: condition.map(String::from),
            is_favorite: false,
            wear_count: 0,
            last_worn: None,
            image_url: None,
            image_path: None,
            created_at: chrono::Utc::now(),
            tags,
        }
    }

    #[test]
    fn into_item_parses_condition_and_nested_tags() {
        let item = row(
            Some("good"),
            serde_json::json!([{"tag": {"id": 2, "name": "summer", "color": null}}]),
        )
        .into_item();
        assert_eq!(item.condition, Some(Condition::Good));
        assert_eq!(item.tags.len(), 1);
        assert_eq!(item.tags[0].name, "summer");
    }

    #[test]
    fn into_item_tolerates_bad_condition_and_null_tags() {
        let item = row(Some("mint"), serde_json::Value::Null).into_item();
        assert_eq!(item.condition, None);
        assert!(item.tags.is_empty());
    }
}
