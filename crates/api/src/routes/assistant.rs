//! Public routes: weather, chat, and the diagnostic listing.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{chat, debug, weather};
use crate::state::AppState;

/// Merged at the `/api/v1` root.
///
/// ```text
/// GET    /weather           -> get_weather
/// POST   /chat              -> chat
/// GET    /debug-wardrobe    -> debug_wardrobe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/weather", get(weather::get_weather))
        .route("/chat", post(chat::chat))
        .route("/debug-wardrobe", get(debug::debug_wardrobe))
}
