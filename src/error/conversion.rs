/**
 * Error Conversion
 *
 * Conversions from internal error types into `ApiError`, plus the
 * `IntoResponse` implementation that turns an `ApiError` into a JSON
 * `{"error": ...}` body with the matching status code.
 *
 * The credential endpoints return 400 for every credential failure, so
 * an unknown username and a wrong password are indistinguishable at the
 * HTTP boundary even though they are distinct types internally.
 */

use axum::response::{IntoResponse, Json, Response};

use crate::auth::credentials::CredentialError;
use crate::error::types::ApiError;
use crate::store::StoreError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.message() }));
        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(key) => ApiError::validation(key.to_string()),
            StoreError::Database(err) => {
                tracing::error!("store failure: {err:?}");
                ApiError::internal("store failure")
            }
        }
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Validation { messages } => ApiError::Validation { messages },
            e @ (CredentialError::UserNotFound | CredentialError::IncorrectPassword) => {
                ApiError::validation(e.to_string())
            }
            CredentialError::Store(err) => {
                tracing::error!("user store failure: {err:?}");
                ApiError::internal("store failure")
            }
            CredentialError::Hash(err) => {
                tracing::error!("password hashing failure: {err:?}");
                ApiError::internal("failed to process password")
            }
        }
    }
}

/// Convenience for handlers that mint tokens
impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::error!("token issuance failure: {err:?}");
        ApiError::internal("failed to issue token")
    }
}
