//! Wardrobe profile model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wardrobe_core::age_profile::AgeBucket;
use wardrobe_core::profile::ProfileSummary;
use wardrobe_core::types::{DbId, Timestamp, UserId};

/// A row from the `wardrobe_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WardrobeProfile {
    pub id: DbId,
    pub user_id: UserId,
    pub name: String,
    pub relation: Option<String>,
    pub age: Option<i32>,
    pub picture_url: Option<String>,
    pub picture_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WardrobeProfile {
    pub fn bucket(&self) -> AgeBucket {
        AgeBucket::classify_db(self.age)
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            id: Some(self.id),
            name: self.name.clone(),
            relation: self.relation.clone(),
            age: self.age,
            picture_url: self.picture_url.clone(),
            is_owner: false,
            bucket: self.bucket(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWardrobeProfile {
    pub name: String,
    pub relation: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWardrobeProfile {
    pub name: Option<String>,
    pub relation: Option<String>,
    pub age: Option<i32>,
}
