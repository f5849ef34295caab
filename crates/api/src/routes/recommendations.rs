use axum::routing::get;
use axum::Router;

use crate::handlers::recommendations;
use crate::state::AppState;

/// Routes mounted at `/recommendations`.
///
/// ```text
/// GET    /                  -> list_recommendations
/// POST   /                  -> create_recommendation
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(recommendations::list_recommendations).post(recommendations::create_recommendation),
    )
}
