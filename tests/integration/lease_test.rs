//! Integration tests for the lease lifecycle and its room occupancy
//! coupling.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn lease_body(room_id: i64) -> serde_json::Value {
    json!({
        "room_id": room_id,
        "start_date": "2026-09-01T00:00:00Z",
        "end_date": "2027-09-01T00:00:00Z",
        "monthly_rent": 1500.0,
        "deposit": 3000.0,
    })
}

#[tokio::test]
async fn test_lease_lifecycle_occupies_and_releases_room() {
    let app = TestApp::new().await;
    app.create_test_user("admin@test.com", "password123", "admin").await;
    app.request(
        "POST",
        "/api/auth/register",
        Some(json!({
            "full_name": "User",
            "email": "user@test.com",
            "password": "pw123",
        })),
        None,
    )
    .await;

    let room_id = app.seed_room("101", 1500.0, "available").await;
    let user_token = app.login("user@test.com", "pw123").await;

    // Create a lease; the room flips to occupied.
    let response = app
        .request("POST", "/api/leases", Some(lease_body(room_id)), Some(&user_token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let lease_id = response.body["id"].as_i64().unwrap();
    assert_eq!(response.body["status"], "active");
    assert_eq!(app.room_status(room_id).await, "occupied");

    // Admin deletes the lease; the room is released.
    let admin_token = app.login("admin@test.com", "password123").await;
    let response = app
        .request(
            "DELETE",
            &format!("/api/leases/{lease_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.room_status(room_id).await, "available");
}

#[tokio::test]
async fn test_lease_on_occupied_room_is_rejected() {
    let app = TestApp::new().await;
    app.create_test_user("first@test.com", "password123", "user").await;
    app.create_test_user("second@test.com", "password123", "user").await;

    let room_id = app.seed_room("102", 900.0, "available").await;

    let first = app.login("first@test.com", "password123").await;
    let response = app
        .request("POST", "/api/leases", Some(lease_body(room_id)), Some(&first))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    // Second attempt sees the occupied room and fails the business rule.
    let second = app.login("second@test.com", "password123").await;
    let response = app
        .request("POST", "/api/leases", Some(lease_body(room_id)), Some(&second))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.room_status(room_id).await, "occupied");
}

#[tokio::test]
async fn test_lease_on_maintenance_room_is_rejected() {
    let app = TestApp::new().await;
    app.create_test_user("tenant@test.com", "password123", "user").await;
    let room_id = app.seed_room("103", 700.0, "maintenance").await;

    let token = app.login("tenant@test.com", "password123").await;
    let response = app
        .request("POST", "/api/leases", Some(lease_body(room_id)), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lease_on_missing_room_is_not_found() {
    let app = TestApp::new().await;
    app.create_test_user("tenant2@test.com", "password123", "user").await;

    let token = app.login("tenant2@test.com", "password123").await;
    let response = app
        .request("POST", "/api/leases", Some(lease_body(99999)), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lease_with_inverted_dates_is_rejected() {
    let app = TestApp::new().await;
    app.create_test_user("tenant3@test.com", "password123", "user").await;
    let room_id = app.seed_room("104", 700.0, "available").await;

    let token = app.login("tenant3@test.com", "password123").await;
    let response = app
        .request(
            "POST",
            "/api/leases",
            Some(json!({
                "room_id": room_id,
                "start_date": "2027-09-01T00:00:00Z",
                "end_date": "2026-09-01T00:00:00Z",
                "monthly_rent": 700.0,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    // Nothing committed: the room is still available.
    assert_eq!(app.room_status(room_id).await, "available");
}

#[tokio::test]
async fn test_users_list_only_their_own_leases() {
    let app = TestApp::new().await;
    app.create_test_user("admin2@test.com", "password123", "admin").await;
    app.create_test_user("mine@test.com", "password123", "user").await;
    app.create_test_user("other@test.com", "password123", "user").await;

    let room_a = app.seed_room("201", 800.0, "available").await;
    let room_b = app.seed_room("202", 800.0, "available").await;

    let mine = app.login("mine@test.com", "password123").await;
    let other = app.login("other@test.com", "password123").await;

    app.request("POST", "/api/leases", Some(lease_body(room_a)), Some(&mine))
        .await;
    app.request("POST", "/api/leases", Some(lease_body(room_b)), Some(&other))
        .await;

    let response = app.request("GET", "/api/leases", None, Some(&mine)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    let admin = app.login("admin2@test.com", "password123").await;
    let response = app.request("GET", "/api/leases", None, Some(&admin)).await;
    assert_eq!(response.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_payments_require_lease_ownership() {
    let app = TestApp::new().await;
    app.create_test_user("payer@test.com", "password123", "user").await;
    app.create_test_user("snoop@test.com", "password123", "user").await;

    let room_id = app.seed_room("301", 1000.0, "available").await;
    let payer = app.login("payer@test.com", "password123").await;

    let response = app
        .request("POST", "/api/leases", Some(lease_body(room_id)), Some(&payer))
        .await;
    let lease_id = response.body["id"].as_i64().unwrap();

    // The tenant records and lists payments.
    let response = app
        .request(
            "POST",
            &format!("/api/leases/{lease_id}/payments"),
            Some(json!({ "amount": 1000.0, "payment_method": "card" })),
            Some(&payer),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "completed");

    let response = app
        .request(
            "GET",
            &format!("/api/leases/{lease_id}/payments"),
            None,
            Some(&payer),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    // A stranger gets a permission error, not a not-found.
    let snoop = app.login("snoop@test.com", "password123").await;
    let response = app
        .request(
            "GET",
            &format!("/api/leases/{lease_id}/payments"),
            None,
            Some(&snoop),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            &format!("/api/leases/{lease_id}/payments"),
            Some(json!({ "amount": 5.0 })),
            Some(&snoop),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
