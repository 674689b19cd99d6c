//! Health check handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use sprintdeck_core::traits::cache::CacheProvider;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "ok" or "degraded".
    pub status: String,
    /// Cache backend status: "up" or "down".
    pub cache: String,
}

/// GET /api/health
///
/// Always 200; a broken cache is reported in the body, not as an error,
/// so load balancers can still distinguish "serving" from "gone".
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache_up = state.cache.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: if cache_up { "ok" } else { "degraded" }.to_string(),
        cache: if cache_up { "up" } else { "down" }.to_string(),
    })
}
