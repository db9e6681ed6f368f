/**
 * Authentication Gate
 *
 * Extractor that turns the `Authentication` request header into a
 * verified `Principal`. Every whisper route takes an `AuthUser`
 * parameter, so no handler body runs - and no existence check happens -
 * before the token is verified.
 *
 * The header is named `Authentication`, not the conventional
 * `Authorization`. That exact name is part of the compatibility contract
 * with existing clients and must be preserved.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::auth::tokens::{AuthTokens, Principal};
use crate::error::ApiError;

/// Name of the token transport header
pub const AUTHENTICATION_HEADER: &str = "authentication";

/// Axum extractor yielding the verified principal for this request
///
/// Rejections:
/// - header absent -> 401 `{"error":"No token provided"}`
/// - malformed header, bad signature, or expired token ->
///   401 `{"error":"Invalid token"}`
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthTokens: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHENTICATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authentication header");
                ApiError::MissingToken
            })?;

        let token = bearer_token(header).ok_or_else(|| {
            tracing::warn!("Malformed Authentication header");
            ApiError::InvalidToken
        })?;

        let tokens = AuthTokens::from_ref(state);
        let principal = tokens.verify(token).map_err(|err| {
            tracing::warn!("Token rejected: {err}");
            ApiError::InvalidToken
        })?;

        Ok(AuthUser(principal))
    }
}

/// Extract the token from a `Bearer <token>` header value
fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
