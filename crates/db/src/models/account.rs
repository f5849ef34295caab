//! Account profile rows (one per authenticated user).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wardrobe_core::types::{Timestamp, UserId};

/// A row from the `account_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccountProfile {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub plan: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `PUT /api/v1/account`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertAccountProfile {
    pub display_name: Option<String>,
}
