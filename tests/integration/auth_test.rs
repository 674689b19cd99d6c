//! Integration tests for the authentication flow.

use http::StatusCode;

use sprintdeck_entity::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.create_test_user("Alice", "alice@example.com", "password123", UserRole::Viewer)
        .await;

    let response = app.login_raw("alice@example.com", "password123").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
    assert_eq!(
        response.body["data"]["user"]["email"],
        "alice@example.com"
    );
    // Neither the refresh token nor the password hash may appear in the body.
    assert!(response.body["data"].get("refresh_token").is_none());
    assert!(response.body["data"]["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_sets_refresh_cookie() {
    let app = TestApp::new().await;
    app.create_test_user("Alice", "alice@example.com", "password123", UserRole::Viewer)
        .await;

    let response = app.login_raw("alice@example.com", "password123").await;
    let cookie = response.set_cookie().expect("no Set-Cookie header");

    assert!(cookie.starts_with("refresh_token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/api/auth/refresh"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.create_test_user("Alice", "alice@example.com", "password123", UserRole::Viewer)
        .await;

    let response = app.login_raw("alice@example.com", "wrongpassword").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let response = app.login_raw("nobody@example.com", "password123").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_invalid_email_is_validation_error() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "not-an-email",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["errors"].is_array());
}

#[tokio::test]
async fn test_me_returns_verified_identity() {
    let app = TestApp::new().await;
    let user = app
        .create_test_user("Alice", "alice@example.com", "password123", UserRole::Editor)
        .await;
    let token = app.login("alice@example.com", "password123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], user.id.to_string());
    assert_eq!(response.body["data"]["email"], "alice@example.com");
    assert_eq!(response.body["data"]["role"], "editor");
}

#[tokio::test]
async fn test_refresh_issues_new_access_token() {
    let app = TestApp::new().await;
    app.create_test_user("Alice", "alice@example.com", "password123", UserRole::Viewer)
        .await;

    let login = app.login_raw("alice@example.com", "password123").await;
    let cookie = login.set_cookie().expect("no Set-Cookie header");
    let refresh_pair = cookie.split(';').next().expect("empty cookie");

    let response = app
        .request_with_cookie("POST", "/api/auth/refresh", None, None, Some(refresh_pair))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let new_token = response.body["data"]["access_token"]
        .as_str()
        .expect("refresh response missing access token")
        .to_string();

    // The fresh access token must be usable.
    let me = app
        .request("GET", "/api/auth/me", None, Some(&new_token))
        .await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_without_cookie_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/auth/refresh", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_access_token_rejected_as_refresh_token() {
    let app = TestApp::new().await;
    app.create_test_user("Alice", "alice@example.com", "password123", UserRole::Viewer)
        .await;
    let token = app.login("alice@example.com", "password123").await;

    // Present the access token where the refresh token belongs.
    let response = app
        .request_with_cookie(
            "POST",
            "/api/auth/refresh",
            None,
            None,
            Some(&format!("refresh_token={token}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_access_token() {
    let app = TestApp::new().await;
    app.create_test_user("Alice", "alice@example.com", "password123", UserRole::Viewer)
        .await;
    let token = app.login("alice@example.com", "password123").await;

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    // The revoked token no longer authenticates.
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}
