//! Route table assembly.

use axum::routing::{get, post};
use axum::{Router, middleware as axum_middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{admin, auth, health, user};
use crate::middleware::gateway;
use crate::state::AppState;

/// Builds the full application router with all middleware layers applied.
///
/// The authorization gateway is the innermost layer, so it runs after
/// tracing/compression but before every handler. Route handlers can assume
/// the gateway has already attached a verified `Principal` on protected
/// paths.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/auth", auth_routes())
        .nest("/users", user_routes())
        .nest("/admin", admin_routes())
        .route("/health", get(health::health));

    Router::new()
        .nest("/api", api)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            gateway::authorize,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list_users).post(user::create_user))
        .route(
            "/{id}",
            get(user::get_user)
                .put(user::update_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
}

fn admin_routes() -> Router<AppState> {
    Router::new().route("/stats", get(admin::stats))
}
