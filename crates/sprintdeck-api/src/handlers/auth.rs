//! Authentication handlers: login, refresh, logout, me.

use axum::Json;
use axum::extract::{Extension, State};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{info, warn};
use validator::Validate;

use sprintdeck_auth::jwt::{Claims, TokenType};
use sprintdeck_core::error::AppError;
use sprintdeck_entity::Principal;

use crate::dto::request::LoginRequest;
use crate::dto::response::{
    ApiResponse, LoginResponse, MessageResponse, PrincipalResponse, RefreshResponse, UserResponse,
};
use crate::error::{ApiResult, validation_error};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Name of the HTTP-only cookie carrying the refresh token.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Path the refresh cookie is scoped to. The browser only sends it to the
/// refresh endpoint, never alongside ordinary API requests.
const REFRESH_COOKIE_PATH: &str = "/api/auth/refresh";

/// POST /api/auth/login
///
/// Verifies credentials and issues a token pair. The access token is returned
/// in the body; the refresh token travels only in an HTTP-only cookie and is
/// never exposed to page scripts.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<LoginResponse>>)> {
    body.validate().map_err(validation_error)?;

    let user = state
        .user_store
        .find_by_email(&body.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %body.email, "login failed: unknown email");
            AppError::authentication("Invalid email or password")
        })?;

    let matches = state
        .password_hasher
        .verify_password(&body.password, &user.password_hash)?;
    if !matches {
        warn!(user_id = %user.id, "login failed: wrong password");
        return Err(AppError::authentication("Invalid email or password").into());
    }

    let principal = Principal::from(&user);
    let pair = state.jwt_encoder.issue_token_pair(&principal)?;

    info!(user_id = %user.id, role = %user.role, "user logged in");

    let ttl_days = state.config.auth.refresh_ttl_days as i64;
    let jar = jar.add(refresh_cookie(pair.refresh_token, ttl_days));

    let response = LoginResponse {
        access_token: pair.access_token,
        expires_at: pair.access_expires_at,
        user: UserResponse::from(&user),
    };
    Ok((jar, Json(ApiResponse::ok(response))))
}

/// POST /api/auth/refresh
///
/// Exchanges a valid refresh cookie for a fresh access token. Any failure
/// (missing cookie, bad signature, wrong token type, expired, revoked) is a
/// 401; this route never returns 403.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<Json<ApiResponse<RefreshResponse>>> {
    let token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| AppError::authentication("refresh token missing"))?;

    let claims = state.jwt_decoder.verify(&token, TokenType::Refresh).await?;
    let (access_token, expires_at) = state.jwt_encoder.issue_access_token(&claims.principal())?;

    info!(user_id = %claims.sub, "access token refreshed");

    Ok(Json(ApiResponse::ok(RefreshResponse {
        access_token,
        expires_at,
    })))
}

/// POST /api/auth/logout
///
/// Revokes the presented access token for the remainder of its lifetime and
/// clears the refresh cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    Extension(claims): Extension<Claims>,
) -> ApiResult<(CookieJar, Json<ApiResponse<MessageResponse>>)> {
    state
        .jwt_decoder
        .revoke(claims.jti, claims.remaining_ttl_seconds())
        .await?;

    // Revoke the refresh token too, when the browser sent it along.
    if let Some(cookie) = jar.get(REFRESH_COOKIE) {
        let token = cookie.value().to_string();
        if let Ok(refresh_claims) = state.jwt_decoder.decode(&token, TokenType::Refresh) {
            state
                .jwt_decoder
                .revoke(refresh_claims.jti, refresh_claims.remaining_ttl_seconds())
                .await?;
        }
    }

    info!(user_id = %claims.sub, "user logged out");

    let jar = jar.remove(expired_refresh_cookie());
    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    ))
}

/// GET /api/auth/me
///
/// Echoes the verified identity attached by the gateway.
pub async fn me(AuthUser(principal): AuthUser) -> Json<ApiResponse<PrincipalResponse>> {
    Json(ApiResponse::ok(PrincipalResponse::from(&principal)))
}

fn refresh_cookie(value: String, ttl_days: i64) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, value))
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::days(ttl_days))
        .build()
}

fn expired_refresh_cookie() -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, ""))
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::ZERO)
        .build()
}
