//! Route definitions for wardrobe profiles.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{form_options, profiles};
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// GET    /                        -> list_profiles
/// POST   /                        -> create_profile
/// PUT    /{id}                    -> update_profile
/// DELETE /{id}                    -> delete_profile
/// POST   /{id}/picture            -> upload_picture (multipart)
/// GET    /{id}/form-options       -> options_for_profile (`main` or id)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profiles::list_profiles).post(profiles::create_profile))
        .route(
            "/{id}",
            put(profiles::update_profile).delete(profiles::delete_profile),
        )
        .route("/{id}/picture", post(profiles::upload_picture))
        .route("/{id}/form-options", get(form_options::options_for_profile))
}
