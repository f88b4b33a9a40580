use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Bearer-token guard for mutating endpoints.
///
/// Used as the first extractor of a handler so the token is checked before the body
/// is parsed. When no token is configured every request passes.
pub struct AuthGuard;

impl AuthGuard {
    /// Checks the `Authorization` header against the configured token.
    ///
    /// # Arguments
    /// - `expected` - Configured token, `None` disables the check
    /// - `headers` - Request headers
    ///
    /// # Returns
    /// - `Ok(())` - No token configured, or the bearer token matches
    /// - `Err(AuthError::MissingToken)` - Header absent or not a bearer credential
    /// - `Err(AuthError::InvalidToken)` - Bearer token does not match
    pub fn require(expected: Option<&str>, headers: &HeaderMap) -> Result<(), AuthError> {
        let Some(expected) = expected else {
            return Ok(());
        };

        let token = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AuthError::MissingToken)?;

        if token != expected {
            return Err(AuthError::InvalidToken);
        }

        Ok(())
    }
}

impl FromRequestParts<AppState> for AuthGuard {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Self::require(state.api_token.as_deref(), &parts.headers)?;

        Ok(AuthGuard)
    }
}

/// Extracts the credential of a `Bearer <token>` header value. The scheme is
/// case-insensitive.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
