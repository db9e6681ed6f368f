//! Shared helpers for the integration suite
//!
//! Every test runs against a fresh in-memory store and a `TestServer`
//! built from the same router the binary serves, with a fixed signing
//! secret so tests can inspect issued tokens.

use axum_test::TestServer;
use std::sync::Arc;

use whisper_board::auth::tokens::{AuthConfig, AuthTokens};
use whisper_board::routes::create_router;
use whisper_board::server::state::AppState;
use whisper_board::store::memory::MemoryStore;
use whisper_board::store::{UserStore, WhisperStore};

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub server: TestServer,
    /// Verifier sharing the server's secret, for inspecting tokens
    pub tokens: AuthTokens,
}

pub fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let users: Arc<dyn UserStore> = store.clone();
    let whispers: Arc<dyn WhisperStore> = store;
    let tokens = AuthTokens::new(&AuthConfig::new(TEST_SECRET));

    let state = AppState {
        users,
        whispers,
        tokens: tokens.clone(),
    };

    TestApp {
        server: TestServer::new(create_router(state)).unwrap(),
        tokens,
    }
}

/// Sign up a user with a known-good password and return the access token
pub async fn signup(server: &TestServer, username: &str, email: &str) -> String {
    let response = server
        .post("/signup")
        .json(&serde_json::json!({
            "username": username,
            "password": "Str0ng!Pass1",
            "email": email,
        }))
        .await;

    assert_eq!(response.status_code().as_u16(), 200);
    let body: serde_json::Value = response.json();
    body["accessToken"].as_str().unwrap().to_string()
}

/// Format a token the way clients send it
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
