//! # sprintdeck-auth
//!
//! Authentication and authorization for the Sprintdeck server.
//!
//! ## Modules
//!
//! - `jwt`: dual-token (access + refresh) JWT creation, validation, and
//!   cache-backed revocation
//! - `rbac`: static role→permission table and enforcement
//! - `password`: Argon2id password hashing

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError, TokenType};
pub use password::PasswordHasher;
pub use rbac::{Permission, PermissionTable, RbacEnforcer};
