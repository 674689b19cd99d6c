//! Authorization gateway that gates every protected route before its handler.
//!
//! The gateway extracts the bearer token, verifies it as an access token,
//! enforces the route's minimum role, and attaches the verified identity to
//! the request. Authentication failures (missing/invalid/expired token) are
//! 401; authorization failures (valid identity, insufficient role) are 403,
//! so the two are always distinguishable.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info, warn};

use sprintdeck_auth::jwt::TokenType;
use sprintdeck_core::error::AppError;
use sprintdeck_entity::UserRole;

use crate::error::ApiError;
use crate::state::AppState;

/// How a route is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    /// Forward unchanged, no credentials required.
    Open,
    /// Any authenticated principal may pass.
    Authenticated,
    /// Only principals with at least this role may pass.
    MinimumRole(UserRole),
}

/// Matches request paths to their protection level.
///
/// Rules are ordered; the first matching prefix wins, so more specific
/// prefixes must come before shorter ones. Unmatched paths are open.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    rules: Vec<(&'static str, Protection)>,
}

impl RouteGuard {
    /// Build a guard from an ordered prefix → protection list.
    pub fn new(rules: Vec<(&'static str, Protection)>) -> Self {
        Self { rules }
    }

    /// The protection level for a request path.
    pub fn protection_for(&self, path: &str) -> Protection {
        self.rules
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix))
            .map(|(_, protection)| *protection)
            .unwrap_or(Protection::Open)
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(vec![
            ("/api/auth/login", Protection::Open),
            ("/api/auth/refresh", Protection::Open),
            ("/api/auth", Protection::Authenticated),
            ("/api/admin", Protection::MinimumRole(UserRole::Admin)),
            ("/api/users", Protection::Authenticated),
        ])
    }
}

/// The gateway middleware itself.
pub async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path();
    let protection = state.route_guard.protection_for(path);

    if protection == Protection::Open {
        return Ok(next.run(request).await);
    }

    let path = path.to_string();
    let token = bearer_token(request.headers()).ok_or_else(|| {
        warn!(%path, "denied: no bearer credentials");
        AppError::authentication("authorization token missing")
    })?;

    let claims = state
        .jwt_decoder
        .verify(&token, TokenType::Access)
        .await
        .inspect_err(|e| warn!(%path, error = %e.message, "denied: token verification failed"))?;

    if let Protection::MinimumRole(minimum) = protection {
        if !claims.role.has_at_least(&minimum) {
            warn!(%path, user_id = %claims.sub, role = %claims.role, "denied: insufficient role");
            return Err(AppError::authorization("Access denied: insufficient role").into());
        }
    }

    info!(%path, user_id = %claims.sub, role = %claims.role, "allowed");
    debug!(jti = %claims.jti, "attaching verified identity to request");

    // The principal comes only from verified claims; identity values in the
    // original request headers are never trusted downstream.
    request.extensions_mut().insert(claims.principal());
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Pulls the token out of a `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .map(String::from)
}
