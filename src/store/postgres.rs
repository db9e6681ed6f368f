/**
 * PostgreSQL Store
 *
 * sqlx-backed implementation of the store traits. Uniqueness of username
 * and email is enforced by the UNIQUE constraints created in the
 * migrations; a violation at insert time maps to `StoreError::Duplicate`.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::users::{NewUser, User};
use crate::store::{DuplicateKey, StoreError, UserStore, WhisperStore};
use crate::whispers::model::Whisper;

/// Store backed by a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map an insert failure, turning unique-constraint violations into
/// `Duplicate` so a signup race never surfaces as a server fault
fn map_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or_default();
            if constraint.contains("email") {
                return StoreError::Duplicate(DuplicateKey::Email);
            }
            return StoreError::Duplicate(DuplicateKey::Username);
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl WhisperStore for PgStore {
    async fn list(&self) -> Result<Vec<Whisper>, StoreError> {
        let whispers = sqlx::query_as::<_, Whisper>(
            r#"
            SELECT id, message, author, creation_date, updated_date
            FROM whispers
            ORDER BY creation_date ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(whispers)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Whisper>, StoreError> {
        let whisper = sqlx::query_as::<_, Whisper>(
            r#"
            SELECT id, message, author, creation_date, updated_date
            FROM whispers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(whisper)
    }

    async fn create(&self, message: String, author: Uuid) -> Result<Whisper, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let whisper = sqlx::query_as::<_, Whisper>(
            r#"
            INSERT INTO whispers (id, message, author, creation_date, updated_date)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, message, author, creation_date, updated_date
            "#,
        )
        .bind(id)
        .bind(&message)
        .bind(author)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(whisper)
    }

    async fn update(&self, id: Uuid, message: String) -> Result<Option<Whisper>, StoreError> {
        // updated_date is stamped here, explicitly, not by a save hook.
        let whisper = sqlx::query_as::<_, Whisper>(
            r#"
            UPDATE whispers
            SET message = $1, updated_date = $2
            WHERE id = $3
            RETURNING id, message, author, creation_date, updated_date
            "#,
        )
        .bind(&message)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(whisper)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM whispers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
