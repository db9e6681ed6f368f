/**
 * Credential Routes
 *
 * POST /signup and POST /login. Neither requires a token; both return
 * `{"accessToken": ...}` on success.
 */

use axum::{routing::post, Router};

use crate::auth::handlers::{login, signup};
use crate::server::state::AppState;

/// Attach the credential endpoints
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/signup", post(signup))
        .route("/login", post(login))
}
