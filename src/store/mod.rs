/**
 * Resource Stores
 *
 * Persistence is a collaborator behind two traits exposing a plain
 * create/read/update/delete contract keyed by opaque ids. Two
 * implementations exist:
 *
 * - `memory::MemoryStore` - in-process tables behind an async RwLock;
 *   used by the test suite and when no database is configured
 * - `postgres::PgStore` - sqlx/PostgreSQL, with uniqueness enforced by
 *   the database's UNIQUE constraints
 *
 * Uniqueness races between simultaneous signups are resolved by the
 * store's atomic insert (write lock or UNIQUE constraint) and surface as
 * `StoreError::Duplicate`, never a crash.
 */

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::users::{NewUser, User};
use crate::whispers::model::Whisper;

/// Which unique key an insert collided on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKey {
    Username,
    Email,
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => write!(f, "Username is already taken"),
            Self::Email => write!(f, "Email is already registered"),
        }
    }
}

/// Store-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// An insert violated a unique constraint
    #[error("{0}")]
    Duplicate(DuplicateKey),
    /// Unexpected database failure; propagated without retry
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence contract for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new record, relying on the store's atomic unique
    /// constraints for username and email
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Look up a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}

/// Persistence contract for whisper records
#[async_trait]
pub trait WhisperStore: Send + Sync {
    /// All whispers, oldest first
    async fn list(&self) -> Result<Vec<Whisper>, StoreError>;

    /// Look up a whisper by id
    async fn get(&self, id: Uuid) -> Result<Option<Whisper>, StoreError>;

    /// Create a whisper authored by `author`, stamping both dates
    async fn create(&self, message: String, author: Uuid) -> Result<Whisper, StoreError>;

    /// Replace the message and refresh `updated_date`; `None` if absent.
    /// The author reference is never touched.
    async fn update(&self, id: Uuid, message: String) -> Result<Option<Whisper>, StoreError>;

    /// Delete by id; `false` if nothing was there
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
