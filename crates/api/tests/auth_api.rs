//! Authentication on the wardrobe routes, plus the routes that need a user
//! but no database.

mod common;

use axum::http::StatusCode;
use common::{bearer_for, body_json, get, get_auth};
use uuid::Uuid;

#[tokio::test]
async fn items_without_token_is_401() {
    let response = get(common::build_test_app(), "/api/v1/items").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing Authorization header");
}

#[tokio::test]
async fn malformed_authorization_header_is_401() {
    let response = get_auth(common::build_test_app(), "/api/v1/profiles", "Token abc").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Bearer"));
}

#[tokio::test]
async fn invalid_token_is_401() {
    let response = get_auth(
        common::build_test_app(),
        "/api/v1/categories",
        "Bearer not-a-jwt",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");
}

#[tokio::test]
async fn form_options_for_child_age() {
    let bearer = bearer_for(Uuid::new_v4());
    let response = get_auth(common::build_test_app(), "/api/v1/form-options?age=8", &bearer).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["bucket"], "child");
    assert_eq!(json["data"]["categories"].as_array().unwrap().len(), 12);
    assert_eq!(json["data"]["occasions"].as_array().unwrap().len(), 6);
    assert_eq!(json["data"]["flags"]["growth_room"], true);
}

#[tokio::test]
async fn form_options_without_age_is_adult() {
    let bearer = bearer_for(Uuid::new_v4());
    let response = get_auth(common::build_test_app(), "/api/v1/form-options", &bearer).await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["bucket"], "adult");
    assert_eq!(json["data"]["categories"].as_array().unwrap().len(), 13);
    assert_eq!(json["data"]["flags"]["work_appropriate"], true);
}

#[tokio::test]
async fn main_profile_form_options_are_adult() {
    let bearer = bearer_for(Uuid::new_v4());
    let response = get_auth(
        common::build_test_app(),
        "/api/v1/profiles/main/form-options",
        &bearer,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["bucket"], "adult");
}

#[tokio::test]
async fn unknown_profile_scope_is_400() {
    let bearer = bearer_for(Uuid::new_v4());
    let response = get_auth(
        common::build_test_app(),
        "/api/v1/profiles/kids/form-options",
        &bearer,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn invalid_item_profile_filter_is_400() {
    let bearer = bearer_for(Uuid::new_v4());
    let response = get_auth(
        common::build_test_app(),
        "/api/v1/items?profile=everyone",
        &bearer,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
