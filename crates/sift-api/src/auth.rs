//! Bearer token extraction.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::Error;
use crate::server::AppState;

/// The caller's access token, forwarded to downstream services.
///
/// With authentication enabled a missing or malformed `Authorization`
/// header is rejected with [`Error::Unauthorized`]. With authentication
/// disabled the token is empty unless one was supplied anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn extract_bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match extract_bearer_token(parts) {
            Some(token) => Ok(BearerToken(token.to_string())),
            None if !state.auth_enabled => Ok(BearerToken(String::new())),
            None => Err(Error::Unauthorized),
        }
    }
}
