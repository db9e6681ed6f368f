/**
 * Signup Handler
 *
 * POST /signup
 *
 * 1. Validate the payload, collecting every violated rule
 * 2. Hash the password (bcrypt, per-hash salt)
 * 3. Insert the user; the store's unique constraints settle races
 * 4. Issue a token for the new principal
 *
 * Any validation or uniqueness failure returns 400 with one aggregated
 * message; success returns 200 with `{"accessToken": ...}`.
 */

use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::auth::credentials;
use crate::auth::handlers::types::{AccessTokenResponse, SignupRequest};
use crate::auth::tokens::AuthTokens;
use crate::error::ApiError;
use crate::store::UserStore;

/// Sign up handler
///
/// Returns 200 with an access token whose principal id equals the id of
/// the freshly created user record.
pub async fn signup(
    State(users): State<Arc<dyn UserStore>>,
    State(tokens): State<AuthTokens>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AccessTokenResponse>, ApiError> {
    tracing::info!("Signup request for username: {}", request.username);

    let user = credentials::create(
        users.as_ref(),
        &request.username,
        &request.password,
        &request.email,
    )
    .await?;

    let access_token = tokens.issue(user.id, &user.username)?;

    tracing::info!("User created: {} ({})", user.username, user.id);

    Ok(Json(AccessTokenResponse { access_token }))
}
