/**
 * Credential Store Operations
 *
 * Creation and verification of user credentials over a `UserStore`.
 *
 * # Creation Pipeline
 *
 * Every side effect is an explicit step, invoked in order:
 *
 * 1. Pure validation (`auth::validate`), aggregating all violations
 * 2. Pure hash derivation (`auth::password`)
 * 3. `UserStore::insert`, whose atomic unique constraints resolve
 *    concurrent signups for the same username or email
 *
 * There is no pre-insert existence check: a lookup-then-insert would race
 * between requests, and the store already enforces uniqueness atomically.
 */

use thiserror::Error;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::users::{NewUser, User};
use crate::auth::validate::validate_signup;
use crate::store::{StoreError, UserStore};

/// Credential-level failures
///
/// `UserNotFound` and `IncorrectPassword` stay distinct here; the HTTP
/// boundary collapses both into a 400 response.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// One or more signup rules violated, all collected
    #[error("{}", .messages.join(", "))]
    Validation { messages: Vec<String> },

    /// No user with the supplied username
    #[error("User not found")]
    UserNotFound,

    /// The supplied password does not match the stored hash
    #[error("Password is incorrect")]
    IncorrectPassword,

    /// Unexpected store failure
    #[error(transparent)]
    Store(StoreError),

    /// bcrypt failure while hashing or verifying
    #[error("Failed to process password")]
    Hash(#[from] bcrypt::BcryptError),
}

impl From<StoreError> for CredentialError {
    fn from(err: StoreError) -> Self {
        match err {
            // A uniqueness conflict is a validation failure to the caller,
            // never a crash.
            StoreError::Duplicate(key) => Self::Validation {
                messages: vec![key.to_string()],
            },
            other => Self::Store(other),
        }
    }
}

/// Validate a signup payload, hash its password, and persist the user
///
/// On success the returned record carries the hash in place of the
/// plaintext, which is dropped here.
pub async fn create(
    store: &dyn UserStore,
    username: &str,
    password: &str,
    email: &str,
) -> Result<User, CredentialError> {
    let valid = validate_signup(username, password, email)
        .map_err(|messages| CredentialError::Validation { messages })?;

    let password_hash = hash_password(password)?;

    let user = store
        .insert(NewUser {
            username: valid.username,
            email: valid.email,
            password_hash,
        })
        .await?;

    Ok(user)
}

/// Look up a user by username and check the supplied password
///
/// bcrypt's comparison does not leak timing correlated with matching
/// characters.
pub async fn verify_credentials(
    store: &dyn UserStore,
    username: &str,
    password: &str,
) -> Result<User, CredentialError> {
    let user = store
        .find_by_username(username.trim())
        .await
        .map_err(CredentialError::from)?
        .ok_or(CredentialError::UserNotFound)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(CredentialError::IncorrectPassword);
    }

    Ok(user)
}
