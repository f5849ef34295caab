//! Route definitions for wardrobe items.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET    /                  -> list_items
/// POST   /                  -> create_item (multipart)
/// GET    /{id}              -> get_item
/// PUT    /{id}              -> update_item (multipart)
/// DELETE /{id}              -> delete_item
/// POST   /{id}/favorite     -> toggle_favorite
/// POST   /{id}/wear         -> record_wear
/// PUT    /{id}/tags         -> set_item_tags
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route(
            "/{id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route("/{id}/favorite", post(items::toggle_favorite))
        .route("/{id}/wear", post(items::record_wear))
        .route("/{id}/tags", put(items::set_item_tags))
}
