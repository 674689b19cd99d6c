//! Integration tests for user CRUD and RBAC enforcement.

use http::StatusCode;

use sprintdeck_entity::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_viewer_can_list_users() {
    let app = TestApp::new().await;
    app.create_test_user("Vera", "vera@example.com", "password123", UserRole::Viewer)
        .await;
    let token = app.login("vera@example.com", "password123").await;

    let response = app.request("GET", "/api/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total"], 1);
}

#[tokio::test]
async fn test_viewer_cannot_create_users() {
    let app = TestApp::new().await;
    app.create_test_user("Vera", "vera@example.com", "password123", UserRole::Viewer)
        .await;
    let token = app.login("vera@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "New User",
                "email": "new@example.com",
                "password": "password123",
                "role": "viewer",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_can_create_users() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    let token = app.login("ada@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "New User",
                "email": "new@example.com",
                "password": "password123",
                "role": "editor",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["email"], "new@example.com");
    assert_eq!(response.body["data"]["role"], "editor");
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    let token = app.login("ada@example.com", "password123").await;

    let body = serde_json::json!({
        "name": "Dup",
        "email": "dup@example.com",
        "password": "password123",
        "role": "viewer",
    });
    let first = app
        .request("POST", "/api/users", Some(body.clone()), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/users", Some(body), Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_with_short_password_is_validation_error() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    let token = app.login("ada@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "Weak",
                "email": "weak@example.com",
                "password": "short",
                "role": "viewer",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["errors"].is_array());
}

#[tokio::test]
async fn test_editor_can_update_but_not_delete() {
    let app = TestApp::new().await;
    app.create_test_user("Ed", "ed@example.com", "password123", UserRole::Editor)
        .await;
    let target = app
        .create_test_user("Tess", "tess@example.com", "password123", UserRole::Viewer)
        .await;
    let token = app.login("ed@example.com", "password123").await;

    let update = app
        .request(
            "PATCH",
            &format!("/api/users/{}", target.id),
            Some(serde_json::json!({ "name": "Tess Updated" })),
            Some(&token),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);
    assert_eq!(update.body["data"]["name"], "Tess Updated");

    let delete = app
        .request(
            "DELETE",
            &format!("/api/users/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_accepts_put_and_patch() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    let target = app
        .create_test_user("Tess", "tess@example.com", "password123", UserRole::Viewer)
        .await;
    let token = app.login("ada@example.com", "password123").await;
    let path = format!("/api/users/{}", target.id);

    let put = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "name": "Via Put" })),
            Some(&token),
        )
        .await;
    assert_eq!(put.status, StatusCode::OK);
    assert_eq!(put.body["data"]["name"], "Via Put");

    let patch = app
        .request(
            "PATCH",
            &path,
            Some(serde_json::json!({ "name": "Via Patch" })),
            Some(&token),
        )
        .await;
    assert_eq!(patch.status, StatusCode::OK);
    assert_eq!(patch.body["data"]["name"], "Via Patch");
}

#[tokio::test]
async fn test_admin_can_delete_user() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    let target = app
        .create_test_user("Tess", "tess@example.com", "password123", UserRole::Viewer)
        .await;
    let token = app.login("ada@example.com", "password123").await;

    let delete = app
        .request(
            "DELETE",
            &format!("/api/users/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::OK);

    let get = app
        .request(
            "GET",
            &format!("/api/users/{}", target.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    let token = app.login("ada@example.com", "password123").await;

    let response = app
        .request(
            "GET",
            &format!("/api/users/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_with_huge_page_number_is_empty_not_panic() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    let token = app.login("ada@example.com", "password123").await;

    let response = app
        .request(
            "GET",
            &format!("/api/users?page={}&limit=100", u64::MAX),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["items"]
            .as_array()
            .expect("items not an array")
            .len(),
        0
    );
}

#[tokio::test]
async fn test_list_pagination() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    for i in 0..4 {
        app.create_test_user(
            &format!("User {i}"),
            &format!("user{i}@example.com"),
            "password123",
            UserRole::Viewer,
        )
        .await;
    }
    let token = app.login("ada@example.com", "password123").await;

    let response = app
        .request("GET", "/api/users?page=1&limit=2", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total"], 5);
    assert_eq!(response.body["data"]["per_page"], 2);
    assert_eq!(
        response.body["data"]["items"]
            .as_array()
            .expect("items not an array")
            .len(),
        2
    );
}
