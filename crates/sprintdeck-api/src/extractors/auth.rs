//! Authenticated-principal extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use sprintdeck_core::error::AppError;
use sprintdeck_entity::Principal;

use crate::error::ApiError;

/// The verified identity of the requesting user.
///
/// Reads the `Principal` the gateway attached to the request; it never
/// re-parses or re-verifies the Authorization header itself. Extraction on a
/// route the gateway did not cover fails with 401 rather than panicking.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::authentication("authorization token missing").into())
    }
}
