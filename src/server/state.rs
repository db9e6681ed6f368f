/**
 * Application State
 *
 * Central state container for the axum application. Everything in it is
 * cheap to clone and safe to share: the stores are `Arc`s over
 * implementations that manage their own synchronization, and
 * `AuthTokens` is immutable after construction.
 *
 * The `FromRef` implementations let handlers extract just the part of
 * the state they use.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::auth::tokens::AuthTokens;
use crate::store::{UserStore, WhisperStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// User records; usually the same object as `whispers`
    pub users: Arc<dyn UserStore>,
    /// Whisper records
    pub whispers: Arc<dyn WhisperStore>,
    /// Token issuer/verifier with the injected signing secret
    pub tokens: AuthTokens,
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn WhisperStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.whispers.clone()
    }
}

impl FromRef<AppState> for AuthTokens {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
