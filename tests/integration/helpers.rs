//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use sprintdeck_api::state::AppState;
use sprintdeck_auth::PasswordHasher;
use sprintdeck_core::config::AppConfig;
use sprintdeck_core::config::auth::AuthConfig;
use sprintdeck_core::config::cache::CacheConfig;
use sprintdeck_core::config::logging::LoggingConfig;
use sprintdeck_core::config::server::ServerConfig;
use sprintdeck_entity::{CreateUser, User, UserRole};
use sprintdeck_store::{MemoryUserStore, UserStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state, for direct cache/store access in assertions
    pub state: AppState,
    store: Arc<MemoryUserStore>,
}

/// A decoded test response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        auth: AuthConfig {
            access_secret: "test-access-secret".to_string(),
            refresh_secret: "test-refresh-secret".to_string(),
            access_ttl_minutes: 15,
            refresh_ttl_days: 7,
        },
        cache: CacheConfig::default(),
        logging: LoggingConfig::default(),
    }
}

impl TestApp {
    /// Create a new test application with an empty in-memory store and cache.
    pub async fn new() -> Self {
        let store = Arc::new(MemoryUserStore::new());
        let state = AppState::build(test_config(), store.clone())
            .await
            .expect("Failed to build test app state");
        let router = sprintdeck_api::build_router(state.clone());

        Self {
            router,
            state,
            store,
        }
    }

    /// Seed a user directly into the store, bypassing the HTTP surface.
    pub async fn create_test_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> User {
        let hasher = PasswordHasher::new();
        let password_hash = hasher
            .hash_password(password)
            .expect("Failed to hash test password");

        self.store
            .create(CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role,
            })
            .await
            .expect("Failed to seed test user")
    }

    /// Make a request against the app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.request_with_cookie(method, path, body, token, None)
            .await
    }

    /// Make a request, optionally carrying a `Cookie` header.
    pub async fn request_with_cookie(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        if let Some(cookie) = cookie {
            builder = builder.header("cookie", cookie);
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build test request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Log in and return the access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self.login_raw(email, password).await;
        assert_eq!(response.status, StatusCode::OK, "login failed for {email}");
        response.body["data"]["access_token"]
            .as_str()
            .expect("login response missing access token")
            .to_string()
    }

    /// Log in and return the full response, including Set-Cookie headers.
    pub async fn login_raw(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": email,
                "password": password,
            })),
            None,
        )
        .await
    }
}

impl TestResponse {
    /// The `Set-Cookie` header value, if any.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers.get("set-cookie").and_then(|v| v.to_str().ok())
    }
}
