/**
 * Whisper Routes
 *
 * The /api/v1/whisper CRUD surface. Every route is gated by the
 * `AuthUser` extractor in its handler; there is no anonymous read path.
 */

use axum::{routing::get, Router};

use crate::server::state::AppState;
use crate::whispers::handlers::{
    create_whisper, delete_whisper, get_whisper, list_whispers, update_whisper,
};

/// Attach the whisper CRUD endpoints
pub fn configure_whisper_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/v1/whisper",
            get(list_whispers).post(create_whisper),
        )
        .route(
            "/api/v1/whisper/{id}",
            get(get_whisper).put(update_whisper).delete(delete_whisper),
        )
}
