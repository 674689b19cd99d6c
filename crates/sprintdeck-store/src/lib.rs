//! # sprintdeck-store
//!
//! The user data store seam. The core treats the relational store as an
//! opaque CRUD collaborator behind [`UserStore`]; implementations are
//! injected, never reached through process-global state. The in-memory
//! implementation backs tests and the default wiring.

pub mod memory;
pub mod user;

pub use memory::MemoryUserStore;
pub use user::UserStore;
