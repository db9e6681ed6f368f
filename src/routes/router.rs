/**
 * Router Configuration
 *
 * Combines the credential and whisper route tables into one router,
 * wraps it in request tracing, and installs a JSON 404 fallback.
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::routes::auth_routes::configure_auth_routes;
use crate::routes::whisper_routes::configure_whisper_routes;
use crate::server::state::AppState;

/// Create the axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_auth_routes(router);
    let router = configure_whisper_routes(router);

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .fallback(|| async { ApiError::NotFound })
        .with_state(app_state)
}
