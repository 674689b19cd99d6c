//! Maps domain `AppError` to HTTP responses.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sprintdeck_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiErrorResponse;

/// Whether server-side error messages are redacted from responses.
static PRODUCTION_MODE: AtomicBool = AtomicBool::new(false);

/// Set production mode. In production, store/internal error messages are
/// replaced with a generic message; in development they are returned verbatim.
pub fn set_production_mode(enabled: bool) {
    PRODUCTION_MODE.store(enabled, Ordering::Relaxed);
}

/// HTTP-facing wrapper around the domain [`AppError`].
///
/// Handlers return this so `?` converts domain errors at the boundary; the
/// wrapper owns the status mapping and response shaping.
#[derive(Debug, Clone)]
pub struct ApiError(pub AppError);

/// Handler result alias.
pub type ApiResult<T> = Result<T, ApiError>;

impl<E> From<E> for ApiError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        let status = match error.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Store
            | ErrorKind::Cache
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(kind = %error.kind, error = %error.message, "Internal server error");
            if PRODUCTION_MODE.load(Ordering::Relaxed) {
                "Internal server error".to_string()
            } else {
                error.message.clone()
            }
        } else {
            error.message.clone()
        };

        let errors = match error.kind {
            ErrorKind::Validation => error
                .details
                .as_ref()
                .and_then(|d| serde_json::from_value(d.clone()).ok()),
            _ => None,
        };

        let body = ApiErrorResponse {
            success: false,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Converts `validator` failures into a validation `AppError` carrying
/// per-field messages.
pub fn validation_error(errors: validator::ValidationErrors) -> AppError {
    let fields: Vec<serde_json::Value> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value for '{field}'"));
                serde_json::json!({ "field": field, "message": message })
            })
        })
        .collect();

    AppError::validation("Request validation failed")
        .with_details(serde_json::Value::Array(fields))
}
