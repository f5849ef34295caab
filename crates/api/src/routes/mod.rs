pub mod account;
pub mod assistant;
pub mod categories;
pub mod health;
pub mod items;
pub mod outfits;
pub mod profiles;
pub mod recommendations;
pub mod tags;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /weather                                          current weather (public)
/// /chat                                             outfit advice chat (public)
/// /debug-wardrobe                                   recent items for a user (public)
///
/// /account                                          get, update
///
/// /items                                            list (search/filter/sort), create
/// /items/{id}                                       get, update, delete
/// /items/{id}/favorite                              toggle favorite (POST)
/// /items/{id}/wear                                  record a wear (POST)
/// /items/{id}/tags                                  replace tag set (PUT)
///
/// /categories                                       list, create
/// /categories/{id}                                  delete
///
/// /tags                                             list, create
/// /tags/{id}                                        update, delete
///
/// /profiles                                         list (main first), create
/// /profiles/{id}                                    update, delete
/// /profiles/{id}/picture                            upload picture (POST)
/// /profiles/{profile}/form-options                  form options for a profile
/// /form-options                                     form options for ?age=
///
/// /outfits                                          list, create
/// /outfits/{id}                                     delete
///
/// /recommendations                                  list, save
/// ```
///
/// Everything except the public routes requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public weather, chat, and diagnostics.
        .merge(assistant::router())
        .nest("/account", account::router())
        .nest("/items", items::router())
        .nest("/categories", categories::router())
        .nest("/tags", tags::router())
        .nest("/profiles", profiles::router())
        .route("/form-options", get(handlers::form_options::options_for_age))
        .nest("/outfits", outfits::router())
        .nest("/recommendations", recommendations::router())
}
