/**
 * Access Tokens
 *
 * JWT issuance and verification for user sessions. Tokens are stateless:
 * validity is fully determined by the HS256 signature and the embedded
 * expiry, with no server-side record of issued or revoked tokens.
 *
 * The signing secret and token lifetime are injected at construction via
 * `AuthConfig`, never read from ambient process state, so tests can use
 * distinct secrets and simulate expiry freely.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Default token lifetime: one hour
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Signing configuration supplied once at startup
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Create a configuration with the default one-hour lifetime
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
        }
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// The authenticated identity derived from a verified token
///
/// Never persisted; exists only for the lifetime of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Id of the user record the token was issued for
    pub id: Uuid,
    /// Username embedded at issue time
    pub username: String,
}

/// Why a presented token was rejected
#[derive(Debug, Error)]
pub enum TokenError {
    /// Malformed token, bad signature, or past expiry
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
    /// Signature and expiry were fine but the subject is not a user id
    #[error("token subject is not a valid user id")]
    InvalidSubject,
}

/// Token issuer and verifier sharing one injected secret
///
/// Cheap to clone; verification is a pure function of the token and the
/// secret, safe to run concurrently without coordination.
#[derive(Clone)]
pub struct AuthTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    token_ttl: Duration,
    validation: Validation,
}

impl AuthTokens {
    /// Build an issuer/verifier pair from configuration
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::default();
        // Issuer and verifier clocks are assumed synchronized; a token is
        // invalid the second it expires.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl: config.token_ttl,
            validation,
        }
    }

    /// Mint a signed token for a principal
    ///
    /// Embeds the user id and username, the issue time, and an expiry one
    /// configured lifetime later.
    pub fn issue(
        &self,
        user_id: Uuid,
        username: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and extract the principal it was issued for
    ///
    /// Fails if the token is malformed, the signature does not validate,
    /// or the current time is past the embedded expiry.
    pub fn verify(&self, token: &str) -> Result<Principal, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        let id = Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::InvalidSubject)?;
        Ok(Principal {
            id,
            username: data.claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn tokens_with_ttl(secret: &str, ttl: Duration) -> AuthTokens {
        AuthTokens::new(&AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl: ttl,
        })
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let tokens = AuthTokens::new(&AuthConfig::new("unit-test-secret"));
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id, "jane_doe").unwrap();
        let principal = tokens.verify(&token).unwrap();

        assert_eq!(principal.id, user_id);
        assert_eq!(principal.username, "jane_doe");
    }

    #[test]
    fn test_token_near_expiry_still_verifies() {
        // A one-second lifetime: verification runs well inside it.
        let tokens = tokens_with_ttl("unit-test-secret", Duration::seconds(1));
        let token = tokens.issue(Uuid::new_v4(), "jane_doe").unwrap();
        assert!(tokens.verify(&token).is_ok());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issuer = tokens_with_ttl("unit-test-secret", Duration::seconds(-60));
        let verifier = AuthTokens::new(&AuthConfig::new("unit-test-secret"));

        let expired = issuer.issue(Uuid::new_v4(), "jane_doe").unwrap();
        assert_matches!(verifier.verify(&expired), Err(TokenError::Jwt(_)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = AuthTokens::new(&AuthConfig::new("secret-a"));
        let verifier = AuthTokens::new(&AuthConfig::new("secret-b"));

        let token = issuer.issue(Uuid::new_v4(), "jane_doe").unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let tokens = AuthTokens::new(&AuthConfig::new("unit-test-secret"));
        assert!(tokens.verify("not.a.token").is_err());
        assert!(tokens.verify("").is_err());
    }

    #[test]
    fn test_issuing_is_not_deterministic_across_time() {
        // Claims embed the issue time, so two tokens for the same principal
        // need not be identical. Verify both still resolve to the principal.
        let tokens = AuthTokens::new(&AuthConfig::new("unit-test-secret"));
        let user_id = Uuid::new_v4();
        let first = tokens.issue(user_id, "jane_doe").unwrap();
        let second = tokens.issue(user_id, "jane_doe").unwrap();
        assert_eq!(tokens.verify(&first).unwrap(), tokens.verify(&second).unwrap());
    }
}
