/**
 * Signup Validation
 *
 * Pure, storage-independent validation for signup input. Every violated
 * rule is collected and reported together rather than stopping at the
 * first, so a client can fix its whole payload in one round trip.
 *
 * Uniqueness of username and email is deliberately NOT checked here; that
 * is the store's insert-time constraint.
 */

/// Characters accepted as the "special character" in a password
pub const SPECIAL_CHARACTERS: &str = "@$!%*#?&";

/// Minimum username length after trimming
pub const USERNAME_MIN_LENGTH: usize = 3;
/// Maximum username length after trimming
pub const USERNAME_MAX_LENGTH: usize = 20;
/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Normalized signup input that passed every rule
///
/// The password is intentionally absent: validation never takes ownership
/// of it, and the plaintext goes straight to hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSignup {
    /// Trimmed username
    pub username: String,
    /// Trimmed, lowercased email
    pub email: String,
}

/// Validate a signup payload, collecting every violated rule
///
/// # Returns
///
/// The normalized username and email on success, or one message per
/// violated rule in a fixed order (username, password, email).
pub fn validate_signup(
    username: &str,
    password: &str,
    email: &str,
) -> Result<ValidSignup, Vec<String>> {
    let mut messages = Vec::new();

    let username = username.trim();
    if username.is_empty() {
        messages.push("Username is required".to_string());
    } else if username.chars().count() < USERNAME_MIN_LENGTH {
        messages.push(format!(
            "Username must be at least {USERNAME_MIN_LENGTH} characters long"
        ));
    } else if username.chars().count() > USERNAME_MAX_LENGTH {
        messages.push(format!(
            "Username must be at most {USERNAME_MAX_LENGTH} characters long"
        ));
    }

    if password.is_empty() {
        messages.push("Password is required".to_string());
    } else if password.chars().count() < PASSWORD_MIN_LENGTH {
        messages.push(format!(
            "Password must be at least {PASSWORD_MIN_LENGTH} characters long"
        ));
    } else if !check_password_strength(password) {
        messages.push(format!(
            "Password must contain at least one letter, one number and one special character ({SPECIAL_CHARACTERS})"
        ));
    }

    let email = email.trim().to_lowercase();
    if email.is_empty() {
        messages.push("Email is required".to_string());
    } else if !is_valid_email(&email) {
        messages.push("Email is not valid".to_string());
    }

    if !messages.is_empty() {
        return Err(messages);
    }

    Ok(ValidSignup {
        username: username.to_string(),
        email,
    })
}

/// Check password composition: at least one letter, one digit, and one
/// character from [`SPECIAL_CHARACTERS`], drawn only from that alphabet.
///
/// Length is validated separately so it gets its own message.
pub fn check_password_strength(password: &str) -> bool {
    let allowed =
        |c: char| c.is_ascii_alphanumeric() || SPECIAL_CHARACTERS.contains(c);
    password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Structural email check: non-empty local part, a single '@', and a
/// dotted domain with no surrounding dots or whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}
