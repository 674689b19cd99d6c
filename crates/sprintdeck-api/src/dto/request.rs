//! Request DTOs.
//!
//! Bodies are validated with the `validator` derive before any handler logic
//! runs; failures surface as 400 responses with per-field messages.

use serde::Deserialize;
use validator::Validate;

use sprintdeck_entity::UserRole;

/// Login request body.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// User creation request body.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    /// Unique email address.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    /// Assigned role.
    pub role: UserRole,
}

/// Partial user update request body. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New display name.
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    /// New email address.
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
}

/// Pagination query parameters.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: Option<u64>,
    /// Items per page.
    pub limit: Option<u64>,
}

impl PageQuery {
    /// The requested page, defaulting to 1.
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// The requested page size, defaulting to 10, capped at 100.
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    /// Zero-based offset into the result set.
    ///
    /// Saturates rather than overflowing: an absurdly large page number
    /// yields an offset past the end of any result set, i.e. an empty page.
    pub fn offset(&self) -> u64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}
