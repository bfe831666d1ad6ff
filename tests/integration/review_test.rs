//! Integration tests for reviews.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_review_rating_bounds() {
    let app = TestApp::new().await;
    app.create_test_user("critic@test.com", "password123", "user").await;
    let room_id = app.seed_room("R1", 350.0, "available").await;

    let token = app.login("critic@test.com", "password123").await;

    for bad_rating in [0, 6, -1] {
        let response = app
            .request(
                "POST",
                "/api/reviews",
                Some(json!({ "room_id": room_id, "rating": bad_rating })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "rating {bad_rating}");
    }

    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({ "room_id": room_id, "rating": 5, "comment": "Great light" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["rating"], 5);
}

#[tokio::test]
async fn test_room_reviews_are_public() {
    let app = TestApp::new().await;
    app.create_test_user("author@test.com", "password123", "user").await;
    let room_id = app.seed_room("R2", 350.0, "available").await;

    let token = app.login("author@test.com", "password123").await;
    app.request(
        "POST",
        "/api/reviews",
        Some(json!({ "room_id": room_id, "rating": 4 })),
        Some(&token),
    )
    .await;

    // No token required to read.
    let response = app
        .request("GET", &format!("/api/rooms/{room_id}/reviews"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_only_author_or_admin_deletes_a_review() {
    let app = TestApp::new().await;
    app.create_test_user("writer@test.com", "password123", "user").await;
    app.create_test_user("rival@test.com", "password123", "user").await;
    app.create_test_user("mod@test.com", "password123", "admin").await;
    let room_id = app.seed_room("R3", 350.0, "available").await;

    let writer = app.login("writer@test.com", "password123").await;
    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({ "room_id": room_id, "rating": 2 })),
            Some(&writer),
        )
        .await;
    let review_id = response.body["id"].as_i64().unwrap();

    let rival = app.login("rival@test.com", "password123").await;
    let response = app
        .request("DELETE", &format!("/api/reviews/{review_id}"), None, Some(&rival))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("DELETE", &format!("/api/reviews/{review_id}"), None, Some(&writer))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // And an admin can remove someone else's review.
    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({ "room_id": room_id, "rating": 1 })),
            Some(&writer),
        )
        .await;
    let review_id = response.body["id"].as_i64().unwrap();

    let admin = app.login("mod@test.com", "password123").await;
    let response = app
        .request("DELETE", &format!("/api/reviews/{review_id}"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_review_on_missing_room_is_not_found() {
    let app = TestApp::new().await;
    app.create_test_user("void@test.com", "password123", "user").await;
    let token = app.login("void@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({ "room_id": 99999, "rating": 3 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
