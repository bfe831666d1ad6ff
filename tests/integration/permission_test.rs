//! Integration tests for the role/ownership permission matrix.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_admin_can_manage_rooms() {
    let app = TestApp::new().await;
    app.create_test_user("roomadmin@test.com", "password123", "admin").await;
    let token = app.login("roomadmin@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({ "room_number": "A1", "price_per_month": 500.0 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let room_id = response.body["id"].as_i64().unwrap();
    assert_eq!(response.body["status"], "available");

    let response = app
        .request(
            "PUT",
            &format!("/api/rooms/{room_id}"),
            Some(json!({ "price_per_month": 550.0 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["price_per_month"], 550.0);
}

#[tokio::test]
async fn test_user_cannot_manage_rooms() {
    let app = TestApp::new().await;
    app.create_test_user("plain@test.com", "password123", "user").await;
    let token = app.login("plain@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({ "room_number": "A2", "price_per_month": 500.0 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_landlord_can_manage_buildings_but_nothing_else() {
    let app = TestApp::new().await;
    app.create_test_user("lord@test.com", "password123", "landlord").await;
    let token = app.login("lord@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/buildings",
            Some(json!({ "name": "Tower", "address": "1 Main St" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let building_id = response.body["id"].as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/buildings/{building_id}"),
            Some(json!({ "name": "Tower One" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The carve-out does not extend to companies, rooms, or categories.
    let response = app
        .request(
            "POST",
            "/api/companies",
            Some(json!({ "name": "Acme" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({ "room_number": "B1", "price_per_month": 100.0 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(json!({ "name": "Office" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_user_cannot_create_buildings() {
    let app = TestApp::new().await;
    app.create_test_user("nobuild@test.com", "password123", "user").await;
    let token = app.login("nobuild@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/buildings",
            Some(json!({ "name": "Shack", "address": "2 Side St" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_user_cannot_read_other_users_lease() {
    let app = TestApp::new().await;
    app.create_test_user("owner@test.com", "password123", "user").await;
    app.create_test_user("intruder@test.com", "password123", "user").await;

    let room_id = app.seed_room("C1", 600.0, "available").await;
    let owner = app.login("owner@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/leases",
            Some(json!({
                "room_id": room_id,
                "start_date": "2026-09-01T00:00:00Z",
                "end_date": "2027-09-01T00:00:00Z",
                "monthly_rent": 600.0,
            })),
            Some(&owner),
        )
        .await;
    let lease_id = response.body["id"].as_i64().unwrap();

    // The owner reads it; a stranger is denied, distinguishably from 404.
    let response = app
        .request("GET", &format!("/api/leases/{lease_id}"), None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let intruder = app.login("intruder@test.com", "password123").await;
    let response = app
        .request("GET", &format!("/api/leases/{lease_id}"), None, Some(&intruder))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("GET", "/api/leases/99999", None, Some(&intruder))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lease_update_is_admin_only() {
    let app = TestApp::new().await;
    app.create_test_user("holder@test.com", "password123", "user").await;
    app.create_test_user("leaseadmin@test.com", "password123", "admin").await;

    let room_id = app.seed_room("D1", 600.0, "available").await;
    let holder = app.login("holder@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/leases",
            Some(json!({
                "room_id": room_id,
                "start_date": "2026-09-01T00:00:00Z",
                "end_date": "2027-09-01T00:00:00Z",
                "monthly_rent": 600.0,
            })),
            Some(&holder),
        )
        .await;
    let lease_id = response.body["id"].as_i64().unwrap();

    // Even the owning tenant may not update the lease.
    let response = app
        .request(
            "PUT",
            &format!("/api/leases/{lease_id}"),
            Some(json!({ "status": "terminated" })),
            Some(&holder),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let admin = app.login("leaseadmin@test.com", "password123").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/leases/{lease_id}"),
            Some(json!({ "status": "terminated" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "terminated");
}

#[tokio::test]
async fn test_public_reads_need_no_token() {
    let app = TestApp::new().await;
    app.seed_room("E1", 450.0, "available").await;

    for path in ["/api/rooms", "/api/companies", "/api/buildings", "/api/categories", "/api/stats"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "expected {path} to be public");
    }
}

#[tokio::test]
async fn test_mutations_need_a_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({ "room_number": "F1", "price_per_month": 100.0 })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("POST", "/api/favorites", Some(json!({ "room_id": 1 })), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
