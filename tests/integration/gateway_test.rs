//! Integration tests for the authorization gateway: 401 (who are you) and
//! 403 (you may not) must stay distinguishable.

use http::StatusCode;

use sprintdeck_entity::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_protected_route_without_token_is_401() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/users", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_protected_route_with_garbage_token_is_401() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/users", None, Some("not.a.token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_failure_modes_share_one_response_message() {
    let app = TestApp::new().await;
    app.create_test_user("Vera", "vera@example.com", "password123", UserRole::Viewer)
        .await;
    let token = app.login("vera@example.com", "password123").await;

    // Revoke the token, then present it again.
    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    let revoked = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(revoked.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/api/auth/me", None, Some("not.a.token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    // The body must not disclose whether the token was revoked, expired, or
    // simply forged.
    assert_eq!(revoked.body["message"], garbage.body["message"]);
}

#[tokio::test]
async fn test_admin_route_with_viewer_token_is_403() {
    let app = TestApp::new().await;
    app.create_test_user("Vera", "vera@example.com", "password123", UserRole::Viewer)
        .await;
    let token = app.login("vera@example.com", "password123").await;

    let response = app
        .request("GET", "/api/admin/stats", None, Some(&token))
        .await;

    // A valid identity with an insufficient role is forbidden, not
    // unauthenticated.
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_route_with_admin_token_is_200() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    let token = app.login("ada@example.com", "password123").await;

    let response = app
        .request("GET", "/api/admin/stats", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_users"], 1);
    assert_eq!(response.body["data"]["admins"], 1);
}

#[tokio::test]
async fn test_health_is_open() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["cache"], "up");
}
