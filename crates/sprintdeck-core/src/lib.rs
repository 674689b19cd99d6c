//! # sprintdeck-core
//!
//! Shared foundations for the Sprintdeck server: the unified [`error::AppError`]
//! type, configuration schemas, and the cache provider trait implemented by
//! the cache backends.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
