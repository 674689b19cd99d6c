//! # sprintdeck-api
//!
//! HTTP API layer for Sprintdeck built on Axum.
//!
//! Provides the REST endpoints, the authorization gateway middleware,
//! extractors, DTOs, and the `AppError` → HTTP response mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
