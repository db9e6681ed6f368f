/**
 * Password Hashing
 *
 * Stateless hashing and verification over a stored hash. bcrypt embeds a
 * random per-hash salt and its cost factor in the hash string, so nothing
 * here needs to track salts separately, and comparison does not leak how
 * many characters matched.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Derive a salted, slow adaptive hash of a plaintext password
///
/// The plaintext must never be persisted; callers hash first and store
/// only the result.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Check a candidate password against a stored hash
///
/// Takes the stored hash as plain data rather than living on a user
/// record, so it is independent of any particular store.
pub fn verify_password(candidate: &str, stored_hash: &str) -> Result<bool, BcryptError> {
    verify(candidate, stored_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_never_equals_plaintext() {
        let hashed = hash_password("Str0ng!Pass1").unwrap();
        assert_ne!(hashed, "Str0ng!Pass1");
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("Str0ng!Pass1").unwrap();
        let second = hash_password("Str0ng!Pass1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_round_trip() {
        let hashed = hash_password("Str0ng!Pass1").unwrap();
        assert!(verify_password("Str0ng!Pass1", &hashed).unwrap());
        assert!(!verify_password("Str0ng!Pass2", &hashed).unwrap());
        assert!(!verify_password("", &hashed).unwrap());
    }
}
