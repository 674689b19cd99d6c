//! Admin-only handlers. The gateway already enforces the admin role for the
//! whole `/api/admin` prefix.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use sprintdeck_core::traits::cache::CacheProvider;
use sprintdeck_entity::UserRole;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// System statistics returned from GET /api/admin/stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStats {
    /// Total registered users.
    pub total_users: u64,
    /// Users with the admin role.
    pub admins: u64,
    /// Users with the editor role.
    pub editors: u64,
    /// Users with the viewer role.
    pub viewers: u64,
    /// Whether the cache backend is reachable.
    pub cache_healthy: bool,
}

/// GET /api/admin/stats
///
/// Reads the store directly rather than through the cache: admin stats should
/// reflect current state, not a TTL-bounded snapshot.
pub async fn stats(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
) -> ApiResult<Json<ApiResponse<SystemStats>>> {
    let users = state.user_store.find_all().await?;
    let count_role = |role: UserRole| users.iter().filter(|u| u.role == role).count() as u64;

    let cache_healthy = state.cache.health_check().await.unwrap_or(false);

    Ok(Json(ApiResponse::ok(SystemStats {
        total_users: users.len() as u64,
        admins: count_role(UserRole::Admin),
        editors: count_role(UserRole::Editor),
        viewers: count_role(UserRole::Viewer),
        cache_healthy,
    })))
}
