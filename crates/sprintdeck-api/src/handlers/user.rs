//! User CRUD handlers.
//!
//! Reads go through the cache-aside manager; mutations hit the store first
//! and invalidate the affected keys before responding. Cached values are the
//! public `UserResponse` shape, never the entity with its password hash.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use sprintdeck_auth::rbac::Permission;
use sprintdeck_cache::keys;
use sprintdeck_core::error::AppError;
use sprintdeck_entity::{CreateUser, UpdateUser};

use crate::dto::request::{CreateUserRequest, PageQuery, UpdateUserRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PaginatedResponse, UserResponse};
use crate::error::{ApiResult, validation_error};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users
///
/// Lists users, paginated. The full list is cached under one key and sliced
/// per request; pagination parameters never fragment the cache.
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Query(page): Query<PageQuery>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<UserResponse>>>> {
    state
        .rbac
        .require_permission(&principal.role, Permission::Read)?;

    let store = &state.user_store;
    let users: Vec<UserResponse> = state
        .cache_aside
        .read_through_default(&keys::users_all(), || async {
            let users = store.find_all().await?;
            Ok(users.iter().map(UserResponse::from).collect())
        })
        .await?;

    let total = users.len() as u64;
    let items = users
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();

    Ok(Json(ApiResponse::ok(PaginatedResponse {
        items,
        total,
        page: page.page(),
        per_page: page.limit(),
    })))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    state
        .rbac
        .require_permission(&principal.role, Permission::Read)?;

    let store = &state.user_store;
    // A missing user is a loader failure, so absence is never cached.
    let user = state
        .cache_aside
        .read_through_default(&keys::user_by_id(id), || async {
            store
                .find_by_id(id)
                .await?
                .as_ref()
                .map(UserResponse::from)
                .ok_or_else(|| AppError::not_found(format!("User '{id}' not found")))
        })
        .await?;

    Ok(Json(ApiResponse::ok(user)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(body): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    state
        .rbac
        .require_permission(&principal.role, Permission::Create)?;
    body.validate().map_err(validation_error)?;

    let password_hash = state.password_hasher.hash_password(&body.password)?;
    let data = CreateUser {
        name: body.name,
        email: body.email,
        password_hash,
        role: body.role,
    };

    let store = &state.user_store;
    let list_key = keys::users_all();
    let user = state
        .cache_aside
        .write_through_keys(&[list_key.as_str()], || async { store.create(data).await })
        .await?;

    info!(user_id = %user.id, actor = %principal.id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(&user))),
    ))
}

/// PATCH /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    state
        .rbac
        .require_permission(&principal.role, Permission::Update)?;
    body.validate().map_err(validation_error)?;

    let data = UpdateUser {
        name: body.name,
        email: body.email,
        role: body.role,
    };

    let store = &state.user_store;
    let entry_key = keys::user_by_id(id);
    let list_key = keys::users_all();
    let user = state
        .cache_aside
        .write_through_keys(&[entry_key.as_str(), list_key.as_str()], || async {
            store
                .update(id, data)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{id}' not found")))
        })
        .await?;

    info!(user_id = %user.id, actor = %principal.id, "user updated");

    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state
        .rbac
        .require_permission(&principal.role, Permission::Delete)?;

    let store = &state.user_store;
    let entry_key = keys::user_by_id(id);
    let list_key = keys::users_all();
    state
        .cache_aside
        .write_through_keys(&[entry_key.as_str(), list_key.as_str()], || async {
            let deleted = store.delete(id).await?;
            if deleted {
                Ok(())
            } else {
                Err(AppError::not_found(format!("User '{id}' not found")))
            }
        })
        .await?;

    info!(user_id = %id, actor = %principal.id, "user deleted");

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted".to_string(),
    })))
}
