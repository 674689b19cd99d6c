//! In-memory user store backed by a concurrent map.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use sprintdeck_core::error::AppError;
use sprintdeck_core::result::AppResult;
use sprintdeck_entity::{CreateUser, UpdateUser, User};

use crate::user::UserStore;

/// In-memory [`UserStore`] implementation.
///
/// Injected where a relational store would be in production. Uniqueness of
/// email is enforced the way the real store's unique index would be.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<Uuid, User>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|e| e.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|e| e.value().email.eq_ignore_ascii_case(email))
            .map(|e| e.value().clone()))
    }

    async fn create(&self, data: CreateUser) -> AppResult<User> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "A user with email '{}' already exists",
                data.email
            )));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, data: UpdateUser) -> AppResult<Option<User>> {
        let Some(mut entry) = self.users.get_mut(&id) else {
            return Ok(None);
        };

        let user = entry.value_mut();
        if let Some(name) = data.name {
            user.name = name;
        }
        if let Some(email) = data.email {
            user.email = email;
        }
        if let Some(role) = data.role {
            user.role = role;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.users.remove(&id).is_some())
    }
}
