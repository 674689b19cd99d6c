//! User store trait.

use async_trait::async_trait;
use uuid::Uuid;

use sprintdeck_core::result::AppResult;
use sprintdeck_entity::{CreateUser, UpdateUser, User};

/// CRUD access to the user data store.
///
/// Every method may fail with a store error, which callers surface as a 500
/// at the boundary. Lookup misses are `Ok(None)`, not errors.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// List all users, newest first.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user and return the stored record.
    async fn create(&self, data: CreateUser) -> AppResult<User>;

    /// Apply a partial update and return the updated record.
    async fn update(&self, id: Uuid, data: UpdateUser) -> AppResult<Option<User>>;

    /// Delete a user by primary key. Returns `true` if a record was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
