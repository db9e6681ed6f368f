/**
 * Login Handler
 *
 * POST /login
 *
 * Verifies the supplied credentials and returns a fresh access token.
 * Both "User not found" and "Password is incorrect" come back as 400,
 * matching the contract of the credential endpoints.
 */

use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::auth::credentials;
use crate::auth::handlers::types::{AccessTokenResponse, LoginRequest};
use crate::auth::tokens::AuthTokens;
use crate::error::ApiError;
use crate::store::UserStore;

/// Login handler
///
/// Password verification goes through bcrypt, which does not leak timing
/// correlated with how much of the password matched.
pub async fn login(
    State(users): State<Arc<dyn UserStore>>,
    State(tokens): State<AuthTokens>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AccessTokenResponse>, ApiError> {
    tracing::info!("Login request for username: {}", request.username);

    let user =
        credentials::verify_credentials(users.as_ref(), &request.username, &request.password)
            .await?;

    let access_token = tokens.issue(user.id, &user.username)?;

    tracing::info!("User logged in: {} ({})", user.username, user.id);

    Ok(Json(AccessTokenResponse { access_token }))
}
