//! Integration tests for the favorite uniqueness invariant.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_favorite_twice_fails_then_refavorite_succeeds() {
    let app = TestApp::new().await;
    app.create_test_user("fan@test.com", "password123", "user").await;
    let room_id = app.seed_room("FAV1", 300.0, "available").await;

    let token = app.login("fan@test.com", "password123").await;
    let body = json!({ "room_id": room_id });

    let response = app
        .request("POST", "/api/favorites", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let favorite_id = response.body["id"].as_i64().unwrap();

    // Second attempt violates the (user, room) uniqueness rule.
    let response = app
        .request("POST", "/api/favorites", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Un-favorite, then re-favorite.
    let response = app
        .request(
            "DELETE",
            &format!("/api/favorites/{favorite_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/api/favorites", Some(body), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_favorite_listing_is_scoped_to_caller() {
    let app = TestApp::new().await;
    app.create_test_user("one@test.com", "password123", "user").await;
    app.create_test_user("two@test.com", "password123", "user").await;
    let room_id = app.seed_room("FAV2", 300.0, "available").await;

    let one = app.login("one@test.com", "password123").await;
    let two = app.login("two@test.com", "password123").await;

    app.request("POST", "/api/favorites", Some(json!({ "room_id": room_id })), Some(&one))
        .await;

    let response = app.request("GET", "/api/favorites", None, Some(&one)).await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    let response = app.request("GET", "/api/favorites", None, Some(&two)).await;
    assert_eq!(response.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_only_owner_or_admin_removes_a_favorite() {
    let app = TestApp::new().await;
    app.create_test_user("keeper@test.com", "password123", "user").await;
    app.create_test_user("thief@test.com", "password123", "user").await;
    app.create_test_user("favadmin@test.com", "password123", "admin").await;
    let room_id = app.seed_room("FAV3", 300.0, "available").await;

    let keeper = app.login("keeper@test.com", "password123").await;
    let response = app
        .request("POST", "/api/favorites", Some(json!({ "room_id": room_id })), Some(&keeper))
        .await;
    let favorite_id = response.body["id"].as_i64().unwrap();

    let thief = app.login("thief@test.com", "password123").await;
    let response = app
        .request(
            "DELETE",
            &format!("/api/favorites/{favorite_id}"),
            None,
            Some(&thief),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let admin = app.login("favadmin@test.com", "password123").await;
    let response = app
        .request(
            "DELETE",
            &format!("/api/favorites/{favorite_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_favoriting_missing_room_is_not_found() {
    let app = TestApp::new().await;
    app.create_test_user("lost@test.com", "password123", "user").await;
    let token = app.login("lost@test.com", "password123").await;

    let response = app
        .request("POST", "/api/favorites", Some(json!({ "room_id": 99999 })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
