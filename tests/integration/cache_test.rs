//! End-to-end cache-aside behavior through the HTTP surface: reads are
//! served from cache within the TTL, and API mutations invalidate before
//! responding.

use http::StatusCode;

use sprintdeck_entity::{UpdateUser, UserRole};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_is_cached_until_api_mutation() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    let token = app.login("ada@example.com", "password123").await;

    // Prime the cache.
    let first = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(first.body["data"]["total"], 1);

    // A write that bypasses the API does not invalidate: the cached list is
    // still served.
    app.create_test_user("Ghost", "ghost@example.com", "password123", UserRole::Viewer)
        .await;
    let cached = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(cached.body["data"]["total"], 1);

    // A write through the API invalidates; the next read recomputes and sees
    // both out-of-band and API writes.
    let created = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "Via Api",
                "email": "api@example.com",
                "password": "password123",
                "role": "viewer",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let fresh = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(fresh.body["data"]["total"], 3);
}

#[tokio::test]
async fn test_single_user_cached_until_patched() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    let target = app
        .create_test_user("Tess", "tess@example.com", "password123", UserRole::Viewer)
        .await;
    let token = app.login("ada@example.com", "password123").await;
    let path = format!("/api/users/{}", target.id);

    let first = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(first.body["data"]["name"], "Tess");

    // Rename out of band; the cached entry still serves the old name.
    app.state
        .user_store
        .update(
            target.id,
            UpdateUser {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("out-of-band update failed");

    let cached = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(cached.body["data"]["name"], "Tess");

    // A PATCH through the API invalidates the entry before responding.
    let patched = app
        .request(
            "PATCH",
            &path,
            Some(serde_json::json!({ "name": "Patched" })),
            Some(&token),
        )
        .await;
    assert_eq!(patched.status, StatusCode::OK);

    let fresh = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(fresh.body["data"]["name"], "Patched");
}

#[tokio::test]
async fn test_failed_mutation_leaves_cache_intact() {
    let app = TestApp::new().await;
    app.create_test_user("Ada", "ada@example.com", "password123", UserRole::Admin)
        .await;
    let token = app.login("ada@example.com", "password123").await;

    let first = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(first.body["data"]["total"], 1);

    // Out-of-band write, invisible while the cached list is fresh.
    app.create_test_user("Ghost", "ghost@example.com", "password123", UserRole::Viewer)
        .await;

    // Creating a duplicate fails in the store; the cached list must survive.
    let conflict = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({
                "name": "Ada Again",
                "email": "ada@example.com",
                "password": "password123",
                "role": "viewer",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(conflict.status, StatusCode::CONFLICT);

    // Had the failed mutation invalidated, this read would recompute and see
    // the ghost user.
    let still_cached = app.request("GET", "/api/users", None, Some(&token)).await;
    assert_eq!(still_cached.body["data"]["total"], 1);
}
