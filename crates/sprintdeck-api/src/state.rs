//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Duration;

use sprintdeck_auth::jwt::decoder::JwtDecoder;
use sprintdeck_auth::jwt::encoder::JwtEncoder;
use sprintdeck_auth::password::hasher::PasswordHasher;
use sprintdeck_auth::rbac::enforcer::RbacEnforcer;
use sprintdeck_cache::aside::CacheAside;
use sprintdeck_cache::provider::CacheManager;
use sprintdeck_core::config::AppConfig;
use sprintdeck_core::result::AppResult;
use sprintdeck_store::UserStore;

use crate::middleware::gateway::RouteGuard;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Cache manager (Redis or in-memory).
    pub cache: Arc<CacheManager>,
    /// Cache-aside consistency manager in front of the user store.
    pub cache_aside: CacheAside,
    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2).
    pub password_hasher: Arc<PasswordHasher>,
    /// Role-based access control enforcer.
    pub rbac: Arc<RbacEnforcer>,
    /// User data store collaborator.
    pub user_store: Arc<dyn UserStore>,
    /// Route protection matcher consulted by the gateway.
    pub route_guard: Arc<RouteGuard>,
}

impl AppState {
    /// Wire up application state from configuration and an injected store.
    ///
    /// Fails fast on configuration errors (missing secrets, unknown cache
    /// provider) so a misconfigured process never starts serving.
    pub async fn build(config: AppConfig, user_store: Arc<dyn UserStore>) -> AppResult<Self> {
        config.validate()?;
        crate::error::set_production_mode(config.server.is_production());

        let cache = Arc::new(CacheManager::new(&config.cache).await?);
        let cache_aside = CacheAside::new(
            Arc::clone(&cache),
            Duration::from_secs(config.cache.default_ttl_seconds),
        );

        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth, Arc::clone(&cache))?);

        Ok(Self {
            config: Arc::new(config),
            cache,
            cache_aside,
            jwt_encoder,
            jwt_decoder,
            password_hasher: Arc::new(PasswordHasher::new()),
            rbac: Arc::new(RbacEnforcer::new()),
            user_store,
            route_guard: Arc::new(RouteGuard::default()),
        })
    }
}
