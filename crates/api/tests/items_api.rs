//! HTTP-level tests for wardrobe items and profiles.
//!
//! Validation failures run against the unreachable pool: a 400 there proves
//! the handler rejected the input before touching the database. The rest use
//! a migrated database.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    bearer_for, body_json, build_app, build_test_app, delete_auth, get_auth, item_form,
    send_item_form, send_json,
};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use wardrobe_core::types::DbId;
use wardrobe_db::repositories::CategoryRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn builtin_category(pool: &PgPool) -> DbId {
    CategoryRepo::list_visible(pool, Uuid::nil())
        .await
        .unwrap()
        .first()
        .expect("built-in categories are seeded")
        .id
}

async fn create_item(pool: &PgPool, bearer: &str, item: serde_json::Value) -> serde_json::Value {
    let response = send_item_form(
        build_app(pool.clone()),
        Method::POST,
        "/api/v1/items",
        bearer,
        item_form(&item, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Validation before persistence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_with_blank_name_is_400_without_db() {
    let bearer = bearer_for(Uuid::new_v4());
    let response = send_item_form(
        build_test_app(),
        Method::POST,
        "/api/v1/items",
        &bearer,
        item_form(&json!({"name": "   ", "category_id": 1}), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Item name is required");
}

#[tokio::test]
async fn create_without_category_is_400_without_db() {
    let bearer = bearer_for(Uuid::new_v4());
    let response = send_item_form(
        build_test_app(),
        Method::POST,
        "/api/v1/items",
        &bearer,
        item_form(&json!({"name": "Shirt", "price": -3.0}), None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_without_item_part_is_400() {
    let bearer = bearer_for(Uuid::new_v4());
    let body = b"--wardrobe-test-boundary--\r\n".to_vec();
    let response = send_item_form(
        build_test_app(),
        Method::POST,
        "/api/v1/items",
        &bearer,
        body,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Image uploads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejected_image_keeps_the_saved_item(pool: PgPool) {
    let bearer = bearer_for(Uuid::new_v4());
    let category = builtin_category(&pool).await;

    let response = send_item_form(
        build_app(pool.clone()),
        Method::POST,
        "/api/v1/items",
        &bearer,
        item_form(
            &json!({"name": "Rain Jacket", "category_id": category}),
            Some(("payload.exe", &b"MZ\x90\x00"[..])),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Rain Jacket");
    assert!(json["data"]["image_url"].is_null());
    assert!(json["image_error"]
        .as_str()
        .unwrap()
        .contains("Unsupported image type"));

    let id = json["data"]["id"].as_i64().unwrap();
    let fetched = get_auth(build_app(pool), &format!("/api/v1/items/{id}"), &bearer).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(fetched).await["data"]["name"], "Rain Jacket");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn accepted_image_is_stored_and_linked(pool: PgPool) {
    let bearer = bearer_for(Uuid::new_v4());
    let category = builtin_category(&pool).await;

    let response = send_item_form(
        build_app(pool),
        Method::POST,
        "/api/v1/items",
        &bearer,
        item_form(
            &json!({"name": "Sneakers", "category_id": category, "price": 60.0}),
            Some(("shoe.PNG", &b"\x89PNG\r\n"[..])),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["image_error"].is_null());
    let url = json["data"]["image_url"].as_str().unwrap();
    assert!(url.starts_with("http://localhost:3000/files/"));
    assert!(url.ends_with(".png"));
    assert_eq!(json["data"]["price"], 60.0);
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn sixth_profile_is_409(pool: PgPool) {
    let bearer = bearer_for(Uuid::new_v4());

    for i in 0..wardrobe_core::profile::MAX_PROFILES {
        let response = send_json(
            build_app(pool.clone()),
            Method::POST,
            "/api/v1/profiles",
            &bearer,
            json!({"name": format!("Kid {i}"), "age": 7}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send_json(
        build_app(pool.clone()),
        Method::POST,
        "/api/v1/profiles",
        &bearer,
        json!({"name": "One too many"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let listed = body_json(get_auth(build_app(pool), "/api/v1/profiles", &bearer).await).await;
    let profiles = listed["data"].as_array().unwrap();
    assert_eq!(profiles.len(), wardrobe_core::profile::MAX_PROFILES + 1);
    assert_eq!(profiles[0]["is_owner"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn item_moves_between_profile_and_main(pool: PgPool) {
    let bearer = bearer_for(Uuid::new_v4());
    let category = builtin_category(&pool).await;

    let profile = body_json(
        send_json(
            build_app(pool.clone()),
            Method::POST,
            "/api/v1/profiles",
            &bearer,
            json!({"name": "Mia", "age": 4}),
        )
        .await,
    )
    .await;
    let profile_id = profile["data"]["id"].as_i64().unwrap();

    let created = create_item(
        &pool,
        &bearer,
        json!({"name": "Mittens", "category_id": category, "profile_id": profile_id}),
    )
    .await;
    let item_id = created["data"]["id"].as_i64().unwrap();

    let main_uri = "/api/v1/items?profile=main";
    let before = body_json(get_auth(build_app(pool.clone()), main_uri, &bearer).await).await;
    assert!(before["data"]["items"].as_array().unwrap().is_empty());

    let response = send_item_form(
        build_app(pool.clone()),
        Method::PUT,
        &format!("/api/v1/items/{item_id}"),
        &bearer,
        item_form(&json!({"profile_id": null}), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"]["profile_id"].is_null());

    let after = body_json(get_auth(build_app(pool), main_uri, &bearer).await).await;
    assert_eq!(after["data"]["items"][0]["id"], item_id);
    assert_eq!(after["data"]["stats"]["total_items"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_profile_returns_items_to_main(pool: PgPool) {
    let bearer = bearer_for(Uuid::new_v4());
    let category = builtin_category(&pool).await;

    let profile = body_json(
        send_json(
            build_app(pool.clone()),
            Method::POST,
            "/api/v1/profiles",
            &bearer,
            json!({"name": "Leo"}),
        )
        .await,
    )
    .await;
    let profile_id = profile["data"]["id"].as_i64().unwrap();

    create_item(
        &pool,
        &bearer,
        json!({"name": "Boots", "category_id": category, "profile_id": profile_id}),
    )
    .await;

    let response = delete_auth(
        build_app(pool.clone()),
        &format!("/api/v1/profiles/{profile_id}"),
        &bearer,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let main = body_json(
        get_auth(build_app(pool), "/api/v1/items?profile=main", &bearer).await,
    )
    .await;
    assert_eq!(main["data"]["items"][0]["name"], "Boots");
}
