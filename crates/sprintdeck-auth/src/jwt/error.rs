//! Token verification failure taxonomy.

use thiserror::Error;

use sprintdeck_core::AppError;

/// Why a token failed verification.
///
/// The distinct variants exist for logging and for in-process callers; at
/// the HTTP boundary every variant collapses into one generic authentication
/// failure, so an unauthenticated caller cannot probe why a token was
/// rejected.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signature did not verify under the expected key, or the token
    /// string could not be parsed at all.
    #[error("invalid token")]
    Invalid,
    /// The token parsed and verified but its `exp` claim has passed.
    #[error("token has expired")]
    Expired,
    /// The token verified but required claims are missing or unreadable.
    #[error("malformed token claims")]
    Malformed,
    /// The token is of the wrong type for this operation (e.g. a refresh
    /// token presented where an access token is expected).
    #[error("wrong token type")]
    WrongType,
    /// The token's `jti` has been revoked before expiry.
    #[error("token has been revoked")]
    Revoked,
}

impl From<TokenError> for AppError {
    fn from(_err: TokenError) -> Self {
        // One message for every failure mode. The decoder logs the specific
        // variant before conversion.
        AppError::authentication("Invalid or expired token")
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::Json(_)
            | jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(_) => Self::Malformed,
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Invalid,
        }
    }
}
