/**
 * API Error Types
 *
 * This module defines the HTTP-facing error taxonomy for the whisper board.
 * Every handler failure is expressed as an `ApiError`, which maps onto a
 * status code and a JSON `{"error": ...}` body.
 *
 * # Error Categories
 *
 * - `Validation` - malformed or missing fields, weak passwords, duplicate
 *   username/email (400). All violated rules are aggregated into one message.
 * - `MissingToken` / `InvalidToken` - authentication failures (401)
 * - `Forbidden` - a valid principal that does not own the resource (403)
 * - `NotFound` - user or whisper absent (404)
 * - `Internal` - unexpected persistence or crypto failures (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// HTTP-facing error taxonomy
///
/// Authentication failures carry the exact messages the API has always
/// returned ("No token provided" / "Invalid token"); clients match on them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more validation rules were violated; every message is kept
    /// so the response can report them all at once.
    #[error("{}", .messages.join(", "))]
    Validation {
        /// One entry per violated rule
        messages: Vec<String>,
    },

    /// No token was presented on a route that requires one
    #[error("No token provided")]
    MissingToken,

    /// The presented token was malformed, had a bad signature, or expired
    #[error("Invalid token")]
    InvalidToken,

    /// The requesting principal is not the author of the resource
    #[error("Forbidden")]
    Forbidden,

    /// The requested user or whisper does not exist
    #[error("Not Found")]
    NotFound,

    /// Unexpected failure; details are logged, not returned to the client
    #[error("{message}")]
    Internal {
        /// Generic description safe to expose
        message: String,
    },
}

impl ApiError {
    /// Create a validation error for a single violated rule
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            messages: vec![message.into()],
        }
    }

    /// Create an internal error with a client-safe description
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the aggregated, human-readable error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad field").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_messages_are_aggregated() {
        let error = ApiError::Validation {
            messages: vec![
                "Username is required".to_string(),
                "Email is not valid".to_string(),
            ],
        };
        assert_eq!(error.message(), "Username is required, Email is not valid");
    }

    #[test]
    fn test_token_error_messages() {
        assert_eq!(ApiError::MissingToken.message(), "No token provided");
        assert_eq!(ApiError::InvalidToken.message(), "Invalid token");
    }
}
