//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sprintdeck_entity::{Principal, User};

/// Standard success response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Standard error response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Per-field validation messages, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// A single per-field validation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// The offending field.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

/// Login response. The refresh token is deliberately absent: it travels only
/// in the HTTP-only cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token for the Authorization header.
    pub access_token: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Refresh response carrying a freshly minted access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// New access token.
    pub access_token: String,
    /// Its expiration.
    pub expires_at: DateTime<Utc>,
}

/// Public user representation; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// The verified identity echoed back by `/api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalResponse {
    /// User ID.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Role.
    pub role: String,
}

impl From<&Principal> for PrincipalResponse {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id,
            email: principal.email.clone(),
            role: principal.role.to_string(),
        }
    }
}

/// Paginated list wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Items in this page.
    pub items: Vec<T>,
    /// Total item count.
    pub total: u64,
    /// Current page.
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}
