/**
 * Application Initialization
 *
 * Builds the application from configuration: picks the store backend,
 * runs migrations when a database is configured, and assembles the
 * router. Persistence failures at startup are fatal; retry policy, if
 * any, belongs to the operator.
 */

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::tokens::AuthTokens;
use crate::routes::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;
use crate::store::memory::MemoryStore;
use crate::store::postgres::PgStore;
use crate::store::{UserStore, WhisperStore};

/// Create the application router from configuration
///
/// With `DATABASE_URL` set, connects to PostgreSQL and runs migrations;
/// otherwise falls back to the in-memory store (data does not survive a
/// restart).
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    let tokens = AuthTokens::new(&config.auth);

    let state = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let pool = PgPool::connect(url).await?;

            tracing::info!("Running database migrations...");
            sqlx::migrate!().run(&pool).await?;

            let store = Arc::new(PgStore::new(pool));
            let users: Arc<dyn UserStore> = store.clone();
            let whispers: Arc<dyn WhisperStore> = store;
            AppState {
                users,
                whispers,
                tokens,
            }
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using the in-memory store");
            let store = Arc::new(MemoryStore::new());
            let users: Arc<dyn UserStore> = store.clone();
            let whispers: Arc<dyn WhisperStore> = store;
            AppState {
                users,
                whispers,
                tokens,
            }
        }
    };

    Ok(create_router(state))
}
