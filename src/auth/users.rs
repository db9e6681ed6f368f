/**
 * User Model
 *
 * The persisted user record. The password hash and email never leave the
 * server: both are excluded from serialization at the type level, so no
 * code path can opt back in per call.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// User record as stored
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, store-generated)
    pub id: Uuid,
    /// Username (unique, 3-20 chars, trimmed)
    pub username: String,
    /// Email address (unique, lowercased); never serialized
    #[serde(skip_serializing)]
    pub email: String,
    /// bcrypt hash; the plaintext never persists past hashing
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for inserting a user record
///
/// Carries the already-derived hash; the store never sees a plaintext
/// password.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Trimmed username
    pub username: String,
    /// Trimmed, lowercased email
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_and_hash_are_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            username: "jane_doe".to_string(),
            email: "jane@doe.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "jane_doe");
    }
}
