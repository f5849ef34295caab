//! Handlers for wardrobe items.
//!
//! Create and edit take a multipart form (`item` JSON plus an optional
//! `image` file). The record is always saved first; an image that fails to
//! upload is reported in `image_error` and does not undo the save.
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use wardrobe_core::error::CoreError;
use wardrobe_core::item::{validate_new_item, ItemPatch, WardrobeItem};
use wardrobe_core::query::query_view;
use wardrobe_core::stats::{compute_stats, WardrobeStats};
use wardrobe_core::types::{DbId, UserId};
use wardrobe_db::models::tag::SetItemTags;
use wardrobe_db::models::wardrobe_item::CreateWardrobeItem;
use wardrobe_db::repositories::{CategoryRepo, WardrobeItemRepo, WardrobeProfileRepo};
use wardrobe_upstream::storage::{image_extension, item_image_path};

use crate::error::{AppError, AppResult};
use crate::handlers::form::{read_record_form, ImageUpload};
use crate::middleware::auth::AuthUser;
use crate::query::ItemListParams;
use crate::response::{DataResponse, SavedWithImage};
use crate::state::AppState;

/// Payload of `GET /api/v1/items`.
#[derive(Debug, Serialize)]
pub struct ItemListing {
    /// Items after search, filters, and sort.
    pub items: Vec<WardrobeItem>,
    /// Statistics over the whole scope, independent of filters.
    pub stats: WardrobeStats,
}

fn item_not_found(id: DbId) -> AppError {
    CoreError::not_found("WardrobeItem", id).into()
}

/// GET /api/v1/items
///
/// Load the scope, compute stats over it, then search/filter/sort.
pub async fn list_items(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ItemListParams>,
) -> AppResult<impl IntoResponse> {
    let scope = params.scope()?;
    let view = params.view();

    let all = WardrobeItemRepo::list(&state.pool, auth.user_id, scope).await?;
    let stats = compute_stats(&all);
    let items = query_view(&all, &view).into_iter().cloned().collect();

    Ok(Json(DataResponse {
        data: ItemListing { items, stats },
    }))
}

/// GET /api/v1/items/{id}
pub async fn get_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = WardrobeItemRepo::find_by_id(&state.pool, auth.user_id, item_id)
        .await?
        .ok_or_else(|| item_not_found(item_id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/items
///
/// Multipart: `item` (JSON [`CreateWardrobeItem`]) and optional `image`.
pub async fn create_item(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = read_record_form::<CreateWardrobeItem>(multipart).await?;
    let input = form.record;

    validate_new_item(&input.name, input.category_id, input.price)?;
    if let Some(category_id) = input.category_id {
        ensure_category_visible(&state, auth.user_id, category_id).await?;
    }
    if let Some(profile_id) = input.profile_id {
        ensure_profile_owned(&state, auth.user_id, profile_id).await?;
    }

    let item = WardrobeItemRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(item_id = item.id, user_id = %auth.user_id, "Wardrobe item created");

    let (item, image_error) = match form.image {
        Some(upload) => attach_image(&state, item, upload).await,
        None => (item, None),
    };

    Ok((
        StatusCode::CREATED,
        Json(SavedWithImage {
            data: item,
            image_error,
        }),
    ))
}

/// PUT /api/v1/items/{id}
///
/// Multipart: `item` (JSON [`ItemPatch`]) and optional `image`. Only the
/// provided fields change; `"profile_id": null` moves the item to the main
/// wardrobe.
pub async fn update_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = read_record_form::<ItemPatch>(multipart).await?;
    let patch = form.record;
    patch.validate()?;

    let mut item = WardrobeItemRepo::find_by_id(&state.pool, auth.user_id, item_id)
        .await?
        .ok_or_else(|| item_not_found(item_id))?;

    if let Some(category_id) = patch.category_id.filter(|c| Some(*c) != item.category_id) {
        ensure_category_visible(&state, auth.user_id, category_id).await?;
    }
    if let Some(Some(profile_id)) = patch.profile_id.filter(|p| *p != item.profile_id) {
        ensure_profile_owned(&state, auth.user_id, profile_id).await?;
    }

    if !patch.is_empty() {
        patch.apply(&mut item);
        item = WardrobeItemRepo::save(&state.pool, &item)
            .await?
            .ok_or_else(|| item_not_found(item_id))?;
        tracing::info!(item_id, user_id = %auth.user_id, "Wardrobe item updated");
    }

    let (item, image_error) = match form.image {
        Some(upload) => attach_image(&state, item, upload).await,
        None => (item, None),
    };

    Ok(Json(SavedWithImage {
        data: item,
        image_error,
    }))
}

/// DELETE /api/v1/items/{id}
///
/// Removes the item and, best effort, its stored image.
pub async fn delete_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let image_path = WardrobeItemRepo::delete(&state.pool, auth.user_id, item_id)
        .await?
        .ok_or_else(|| item_not_found(item_id))?;

    if let Some(path) = image_path {
        remove_object(&state, &path).await;
    }

    tracing::info!(item_id, user_id = %auth.user_id, "Wardrobe item deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/items/{id}/favorite
pub async fn toggle_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = WardrobeItemRepo::toggle_favorite(&state.pool, auth.user_id, item_id)
        .await?
        .ok_or_else(|| item_not_found(item_id))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/items/{id}/wear
///
/// Count one more wear, dated today (UTC).
pub async fn record_wear(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    let item = WardrobeItemRepo::record_wear(&state.pool, auth.user_id, item_id, today)
        .await?
        .ok_or_else(|| item_not_found(item_id))?;

    tracing::debug!(item_id, wear_count = item.wear_count, "Wear recorded");
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/items/{id}/tags
///
/// Replace the item's tag set.
pub async fn set_item_tags(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<SetItemTags>,
) -> AppResult<impl IntoResponse> {
    let item = WardrobeItemRepo::set_tags(&state.pool, auth.user_id, item_id, &input.tag_ids)
        .await?
        .ok_or_else(|| item_not_found(item_id))?;
    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_category_visible(
    state: &AppState,
    user_id: UserId,
    category_id: DbId,
) -> AppResult<()> {
    CategoryRepo::find_visible(&state.pool, user_id, category_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown category {category_id}"
            )))
        })?;
    Ok(())
}

async fn ensure_profile_owned(state: &AppState, user_id: UserId, profile_id: DbId) -> AppResult<()> {
    WardrobeProfileRepo::find_by_id(&state.pool, user_id, profile_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown profile {profile_id}"
            )))
        })?;
    Ok(())
}

/// Store `upload` and point the saved item at it.
///
/// Never fails: on any error the item is returned as it was, together with
/// a message for the client.
async fn attach_image(
    state: &AppState,
    item: WardrobeItem,
    upload: ImageUpload,
) -> (WardrobeItem, Option<String>) {
    match store_item_image(state, &item, &upload).await {
        Ok(updated) => {
            if let Some(old) = item.image_path.as_deref() {
                if updated.image_path.as_deref() != Some(old) {
                    remove_object(state, old).await;
                }
            }
            (updated, None)
        }
        Err(e) => {
            tracing::warn!(
                item_id = item.id,
                filename = %upload.filename,
                error = %e,
                "Item image upload failed; record kept without the new image"
            );
            (item, Some(e.to_string()))
        }
    }
}

async fn store_item_image(
    state: &AppState,
    item: &WardrobeItem,
    upload: &ImageUpload,
) -> AppResult<WardrobeItem> {
    let ext = image_extension(&upload.filename)?;
    let path = item_image_path(item.user_id, item.id, &ext);
    let stored = state.storage.upload(&upload.bytes, &path).await?;

    let mut updated = item.clone();
    ItemPatch::image(stored.url, stored.path).apply(&mut updated);

    WardrobeItemRepo::save(&state.pool, &updated)
        .await?
        .ok_or_else(|| item_not_found(item.id))
}

/// Delete a stored object, logging instead of failing.
pub(crate) async fn remove_object(state: &AppState, path: &str) {
    if let Err(e) = state.storage.delete(path).await {
        tracing::warn!(path, error = %e, "Failed to delete stored object");
    }
}
