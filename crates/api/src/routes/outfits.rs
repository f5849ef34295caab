use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::outfits;
use crate::state::AppState;

/// Routes mounted at `/outfits`.
///
/// ```text
/// GET    /                  -> list_outfits
/// POST   /                  -> create_outfit
/// DELETE /{id}              -> delete_outfit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(outfits::list_outfits).post(outfits::create_outfit))
        .route("/{id}", delete(outfits::delete_outfit))
}
