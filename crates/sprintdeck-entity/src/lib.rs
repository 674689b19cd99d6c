//! # sprintdeck-entity
//!
//! Domain entities for Sprintdeck: the user model, the closed role set, and
//! the verified request principal.

pub mod principal;
pub mod user;

pub use principal::Principal;
pub use user::{CreateUser, UpdateUser, User, UserRole};
