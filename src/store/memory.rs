/**
 * In-Memory Store
 *
 * HashMap-backed implementation of the store traits behind a single
 * `tokio::sync::RwLock`. Uniqueness is checked while holding the write
 * lock, so two concurrent signups for the same username or email cannot
 * both succeed.
 *
 * Used by the test suite and as the fallback when `DATABASE_URL` is not
 * configured.
 */

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::users::{NewUser, User};
use crate::store::{DuplicateKey, StoreError, UserStore, WhisperStore};
use crate::whispers::model::Whisper;

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    whispers: HashMap<Uuid, Whisper>,
}

/// In-process store implementing both `UserStore` and `WhisperStore`
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.inner.write().await;

        // Both checks happen under the write lock; no partial record can
        // be observed by a racing insert.
        if tables
            .users
            .values()
            .any(|u| u.username == new_user.username)
        {
            return Err(StoreError::Duplicate(DuplicateKey::Username));
        }
        if tables.users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::Duplicate(DuplicateKey::Email));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables.users.get(&id).cloned())
    }
}

#[async_trait]
impl WhisperStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Whisper>, StoreError> {
        let tables = self.inner.read().await;
        let mut whispers: Vec<Whisper> = tables.whispers.values().cloned().collect();
        whispers.sort_by_key(|w| (w.creation_date, w.id));
        Ok(whispers)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Whisper>, StoreError> {
        let tables = self.inner.read().await;
        Ok(tables.whispers.get(&id).cloned())
    }

    async fn create(&self, message: String, author: Uuid) -> Result<Whisper, StoreError> {
        let now = Utc::now();
        let whisper = Whisper {
            id: Uuid::new_v4(),
            message,
            author,
            creation_date: now,
            updated_date: now,
        };
        let mut tables = self.inner.write().await;
        tables.whispers.insert(whisper.id, whisper.clone());
        Ok(whisper)
    }

    async fn update(&self, id: Uuid, message: String) -> Result<Option<Whisper>, StoreError> {
        let mut tables = self.inner.write().await;
        let Some(whisper) = tables.whispers.get_mut(&id) else {
            return Ok(None);
        };
        whisper.message = message;
        whisper.updated_date = Utc::now();
        Ok(Some(whisper.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut tables = self.inner.write().await;
        Ok(tables.whispers.remove(&id).is_some())
    }
}
