//! Integration tests for registration, login, and identity resolution.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_login_me_roundtrip() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "full_name": "Alice Tenant",
                "email": "alice@test.com",
                "password": "pw123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "alice@test.com");
    assert_eq!(response.body["role"], "user");
    assert!(response.body.get("password_hash").is_none());

    let token = app.login("alice@test.com", "pw123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "alice@test.com");
    assert_eq!(response.body["full_name"], "Alice Tenant");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    app.create_test_user("dup@test.com", "password123", "user").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "full_name": "Second",
                "email": "dup@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_as_landlord() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "full_name": "Larry Landlord",
                "email": "larry@test.com",
                "password": "password123",
                "role": "landlord",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["role"], "landlord");
}

#[tokio::test]
async fn test_register_as_admin_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "full_name": "Eve",
                "email": "eve@test.com",
                "password": "password123",
                "role": "admin",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.create_test_user("bob@test.com", "password123", "user").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "bob@test.com", "password": "wrong" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@test.com", "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_tampered_token() {
    let app = TestApp::new().await;
    app.create_test_user("carol@test.com", "password123", "user").await;
    let token = app.login("carol@test.com", "password123").await;

    let mut tampered = token;
    tampered.push('x');

    let response = app.request("GET", "/api/auth/me", None, Some(&tampered)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_resolve_optional_yields_anonymous_on_bad_credentials() {
    use std::sync::Arc;

    use renthub_auth::identity::IdentityResolver;
    use renthub_auth::jwt::JwtDecoder;
    use renthub_core::config::auth::AuthConfig;
    use renthub_database::repositories::user::UserRepository;

    let app = TestApp::new().await;
    app.create_test_user("opt@test.com", "password123", "user").await;
    let token = app.login("opt@test.com", "password123").await;

    let decoder = Arc::new(JwtDecoder::new(&AuthConfig {
        jwt_secret: "integration-test-secret".to_string(),
        token_ttl_minutes: 60,
        password_min_length: 4,
    }));
    let user_repo = Arc::new(UserRepository::new(app.db_pool.clone()));
    let resolver = IdentityResolver::new(decoder, user_repo);

    // No credentials and invalid credentials both resolve to anonymous.
    assert!(resolver.resolve_optional(None).await.unwrap().is_none());
    assert!(
        resolver
            .resolve_optional(Some("Bearer garbage"))
            .await
            .unwrap()
            .is_none()
    );

    // Valid credentials resolve to the user.
    let header = format!("Bearer {token}");
    let user = resolver.resolve_optional(Some(&header)).await.unwrap();
    assert_eq!(user.unwrap().email, "opt@test.com");
}

#[tokio::test]
async fn test_valid_token_for_deleted_user_is_not_found() {
    let app = TestApp::new().await;
    let user_id = app.create_test_user("gone@test.com", "password123", "user").await;
    let token = app.login("gone@test.com", "password123").await;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&app.db_pool)
        .await
        .unwrap();

    // The token still verifies, but its subject no longer exists: 404,
    // not 401.
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
