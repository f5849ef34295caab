use axum::routing::get;
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Routes mounted at `/account`.
///
/// ```text
/// GET    /                  -> get_account
/// PUT    /                  -> update_account
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(account::get_account).put(account::update_account))
}
