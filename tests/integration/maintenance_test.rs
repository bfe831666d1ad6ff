//! Integration tests for maintenance requests and resolution stamping.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_resolution_stamps_resolved_at_once() {
    let app = TestApp::new().await;
    app.create_test_user("fixer@test.com", "password123", "admin").await;
    app.create_test_user("renter@test.com", "password123", "user").await;
    let room_id = app.seed_room("M1", 400.0, "available").await;

    let renter = app.login("renter@test.com", "password123").await;
    let response = app
        .request(
            "POST",
            "/api/maintenance",
            Some(json!({ "room_id": room_id, "description": "Broken window" })),
            Some(&renter),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "pending");
    assert!(response.body["resolved_at"].is_null());
    let request_id = response.body["id"].as_i64().unwrap();

    // Admin resolves: resolved_at is stamped.
    let admin = app.login("fixer@test.com", "password123").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/maintenance/{request_id}"),
            Some(json!({ "status": "resolved" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "resolved");
    let stamped = response.body["resolved_at"].as_str().unwrap().to_string();

    // A later edit that does not re-enter `resolved` keeps the stamp.
    let response = app
        .request(
            "PUT",
            &format!("/api/maintenance/{request_id}"),
            Some(json!({ "priority": "high" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["resolved_at"].as_str().unwrap(), stamped);
}

#[tokio::test]
async fn test_update_is_admin_only() {
    let app = TestApp::new().await;
    app.create_test_user("tenant@test.com", "password123", "user").await;
    let room_id = app.seed_room("M2", 400.0, "available").await;

    let tenant = app.login("tenant@test.com", "password123").await;
    let response = app
        .request(
            "POST",
            "/api/maintenance",
            Some(json!({ "room_id": room_id, "description": "Leak" })),
            Some(&tenant),
        )
        .await;
    let request_id = response.body["id"].as_i64().unwrap();

    // The raising tenant may not move the status themselves.
    let response = app
        .request(
            "PUT",
            &format!("/api/maintenance/{request_id}"),
            Some(json!({ "status": "resolved" })),
            Some(&tenant),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_requests_are_tenant_scoped() {
    let app = TestApp::new().await;
    app.create_test_user("a@test.com", "password123", "user").await;
    app.create_test_user("b@test.com", "password123", "user").await;
    let room_id = app.seed_room("M3", 400.0, "available").await;

    let a = app.login("a@test.com", "password123").await;
    let b = app.login("b@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/maintenance",
            Some(json!({ "room_id": room_id, "description": "Draft" })),
            Some(&a),
        )
        .await;
    let request_id = response.body["id"].as_i64().unwrap();

    let response = app.request("GET", "/api/maintenance", None, Some(&b)).await;
    assert_eq!(response.body.as_array().unwrap().len(), 0);

    let response = app
        .request("GET", &format!("/api/maintenance/{request_id}"), None, Some(&b))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // The owner may delete their own request.
    let response = app
        .request(
            "DELETE",
            &format!("/api/maintenance/{request_id}"),
            None,
            Some(&a),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
