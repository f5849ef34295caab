//! Outfit model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wardrobe_core::types::{DbId, Timestamp, UserId};

/// A row from `outfits` with its item ids aggregated in position order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Outfit {
    pub id: DbId,
    pub user_id: UserId,
    pub profile_id: Option<DbId>,
    pub name: String,
    pub occasion: Option<String>,
    pub season: Option<String>,
    pub notes: Option<String>,
    pub item_ids: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOutfit {
    pub name: String,
    pub profile_id: Option<DbId>,
    pub occasion: Option<String>,
    pub season: Option<String>,
    pub notes: Option<String>,
    pub item_ids: Vec<DbId>,
}
