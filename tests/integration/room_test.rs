//! Integration tests for room listing, filtering, and stats.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_room_filters() {
    let app = TestApp::new().await;
    app.seed_room("F-100", 500.0, "available").await;
    app.seed_room("F-200", 1500.0, "available").await;
    app.seed_room("F-300", 2500.0, "occupied").await;

    let response = app.request("GET", "/api/rooms", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 3);

    let response = app
        .request("GET", "/api/rooms?status=available", None, None)
        .await;
    assert_eq!(response.body.as_array().unwrap().len(), 2);

    let response = app
        .request("GET", "/api/rooms?min_price=1000&max_price=2000", None, None)
        .await;
    let rooms = response.body.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["room_number"], "F-200");

    let response = app
        .request("GET", "/api/rooms?skip=1&limit=1", None, None)
        .await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_missing_room_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/rooms/99999", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_room_detail_includes_photos_array() {
    let app = TestApp::new().await;
    let room_id = app.seed_room("P-1", 500.0, "available").await;

    let response = app
        .request("GET", &format!("/api/rooms/{room_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["photos"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_stats_counts() {
    let app = TestApp::new().await;
    app.create_test_user("counted@test.com", "password123", "user").await;
    app.seed_room("S-1", 500.0, "available").await;
    app.seed_room("S-2", 500.0, "occupied").await;

    let response = app.request("GET", "/api/stats", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["available_rooms"], 1);
    assert_eq!(response.body["registered_users"], 1);
    assert_eq!(response.body["active_leases"], 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["database"], true);
}

#[tokio::test]
async fn test_company_crud_as_admin() {
    let app = TestApp::new().await;
    app.create_test_user("corp@test.com", "password123", "admin").await;
    let token = app.login("corp@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/companies",
            Some(json!({ "name": "Acme Holdings", "tax_id": "TX-1" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let company_id = response.body["id"].as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/companies/{company_id}"),
            Some(json!({ "contact_person": "J. Doe" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["contact_person"], "J. Doe");
    // Unset fields are untouched by the partial update.
    assert_eq!(response.body["name"], "Acme Holdings");

    let response = app
        .request(
            "DELETE",
            &format!("/api/companies/{company_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/companies/{company_id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
