//! Wardrobe item domain type, condition enum, patching and validation.
//!
//! [`WardrobeItem`] is the shape the query engine and statistics work on.
//! The db crate assembles it from a row plus its normalized tags.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp, UserId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Category name used for items with no category.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Filter value meaning "do not filter on this field".
pub const FILTER_ALL: &str = "all";

pub const MAX_NAME_LENGTH: usize = 200;

pub const CONDITION_NEW: &str = "new";
pub const CONDITION_EXCELLENT: &str = "excellent";
pub const CONDITION_GOOD: &str = "good";
pub const CONDITION_FAIR: &str = "fair";
pub const CONDITION_POOR: &str = "poor";

pub const VALID_CONDITIONS: &[&str] = &[
    CONDITION_NEW,
    CONDITION_EXCELLENT,
    CONDITION_GOOD,
    CONDITION_FAIR,
    CONDITION_POOR,
];

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// Physical wear state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            CONDITION_NEW => Ok(Self::New),
            CONDITION_EXCELLENT => Ok(Self::Excellent),
            CONDITION_GOOD => Ok(Self::Good),
            CONDITION_FAIR => Ok(Self::Fair),
            CONDITION_POOR => Ok(Self::Poor),
            _ => Err(CoreError::Validation(format!(
                "Invalid condition '{s}'. Must be one of: {}",
                VALID_CONDITIONS.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => CONDITION_NEW,
            Self::Excellent => CONDITION_EXCELLENT,
            Self::Good => CONDITION_GOOD,
            Self::Fair => CONDITION_FAIR,
            Self::Poor => CONDITION_POOR,
        }
    }
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// A tag as attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// A clothing item with its category name and tags resolved.
///
/// `profile_id = None` means the item lives in the owner's main wardrobe.
/// `condition = None` covers both "not set" and unrecognized stored values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WardrobeItem {
    pub id: DbId,
    pub user_id: UserId,
    pub profile_id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub condition: Option<Condition>,
    pub is_favorite: bool,
    pub wear_count: i32,
    pub last_worn: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub image_path: Option<String>,
    pub created_at: Timestamp,
    pub tags: Vec<TagRef>,
}

impl WardrobeItem {
    /// Category name for grouping and filtering.
    pub fn category_key(&self) -> &str {
        self.category_name.as_deref().unwrap_or(UNCATEGORIZED)
    }

    /// Wear count clamped to zero for arithmetic.
    pub fn wear_count_or_zero(&self) -> i64 {
        i64::from(self.wear_count.max(0))
    }

    /// Case-insensitive tag lookup, folding the same way as text search.
    pub fn has_tag(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.tags.iter().any(|t| t.name.to_lowercase() == needle)
    }
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

/// Partial update from the edit form. Only provided fields change.
///
/// Image fields are not part of the form payload; they are set by the upload
/// step through [`ItemPatch::image`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub category_id: Option<DbId>,
    pub condition: Option<Condition>,
    pub is_favorite: Option<bool>,
    pub wear_count: Option<i32>,
    pub last_worn: Option<NaiveDate>,
    /// `Some(None)` (JSON `null`) moves the item back to the main wardrobe.
    #[serde(default, deserialize_with = "present")]
    pub profile_id: Option<Option<DbId>>,
    #[serde(skip)]
    pub image_url: Option<String>,
    #[serde(skip)]
    pub image_path: Option<String>,
}

impl ItemPatch {
    /// A patch that only replaces the stored image.
    pub fn image(url: String, path: String) -> Self {
        Self {
            image_url: Some(url),
            image_path: Some(path),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.brand.is_none()
            && self.color.is_none()
            && self.size.is_none()
            && self.price.is_none()
            && self.purchase_date.is_none()
            && self.category_id.is_none()
            && self.condition.is_none()
            && self.is_favorite.is_none()
            && self.wear_count.is_none()
            && self.last_worn.is_none()
            && self.profile_id.is_none()
            && self.image_url.is_none()
            && self.image_path.is_none()
    }

    /// Validate the provided fields with the same rules as creation.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_item_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(count) = self.wear_count {
            validate_wear_count(count)?;
        }
        Ok(())
    }

    /// Apply the patch. Category name is not touched here; the caller
    /// re-resolves it when `category_id` changes.
    pub fn apply(&self, item: &mut WardrobeItem) {
        if let Some(v) = &self.name {
            item.name = v.trim().to_string();
        }
        if let Some(v) = &self.description {
            item.description = Some(v.clone());
        }
        if let Some(v) = &self.brand {
            item.brand = Some(v.clone());
        }
        if let Some(v) = &self.color {
            item.color = Some(v.clone());
        }
        if let Some(v) = &self.size {
            item.size = Some(v.clone());
        }
        if let Some(v) = self.price {
            item.price = Some(v);
        }
        if let Some(v) = self.purchase_date {
            item.purchase_date = Some(v);
        }
        if let Some(v) = self.category_id {
            item.category_id = Some(v);
        }
        if let Some(v) = self.condition {
            item.condition = Some(v);
        }
        if let Some(v) = self.is_favorite {
            item.is_favorite = v;
        }
        if let Some(v) = self.wear_count {
            item.wear_count = v;
        }
        if let Some(v) = self.last_worn {
            item.last_worn = Some(v);
        }
        if let Some(v) = self.profile_id {
            item.profile_id = v;
        }
        if let Some(v) = &self.image_url {
            item.image_url = Some(v.clone());
        }
        if let Some(v) = &self.image_path {
            item.image_path = Some(v.clone());
        }
    }
}

/// Marks a field as present even when its value is `null`, so a missing
/// key and an explicit `null` stay distinguishable.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Name must be non-blank and bounded.
pub fn validate_item_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Item name is required".into()));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Item name exceeds maximum length of {MAX_NAME_LENGTH}"
        )));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Validation(
            "Price must be a non-negative number".into(),
        ));
    }
    Ok(())
}

pub fn validate_wear_count(count: i32) -> Result<(), CoreError> {
    if count < 0 {
        return Err(CoreError::Validation(
            "Wear count must not be negative".into(),
        ));
    }
    Ok(())
}

/// Validate the required fields of a new item.
pub fn validate_new_item(
    name: &str,
    category_id: Option<DbId>,
    price: Option<f64>,
) -> Result<(), CoreError> {
    validate_item_name(name)?;
    if category_id.is_none() {
        return Err(CoreError::Validation("Item category is required".into()));
    }
    if let Some(p) = price {
        validate_price(p)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
