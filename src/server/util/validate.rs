//! Validation and normalization of registration input.
//!
//! All checks run before the account store is touched, so a rejected payload never leaves a
//! partial write behind.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::user::UserError;

/// Minimum number of characters in an account password.
pub const PASSWORD_MIN_LENGTH: usize = 5;

/// Maximum number of characters in an account email.
pub const EMAIL_MAX_LENGTH: usize = 255;

/// Maximum number of characters in an account display name.
pub const NAME_MAX_LENGTH: usize = 255;

// Applied after normalization, so the domain is already lower-case. Domain labels are
// Unicode letters and digits joined by hyphens, so internationalized domains match.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[^\s@]+@(?:localhost|(?:[^\W_](?:(?:[^\W_]|-)*[^\W_])?\.)+[^\W_](?:(?:[^\W_]|-)*[^\W_])?)$",
    )
    .expect("email pattern is a valid regex")
});

/// Normalizes an email address.
///
/// Surrounding whitespace is trimmed and the domain part is lower-cased. The local part is
/// left as given since mail servers may treat it case-sensitively.
///
/// # Example
/// ```
/// use accounts::server::util::validate::normalize_email;
///
/// assert_eq!(normalize_email(" Test@EXAMPLE.com "), "Test@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();

    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Normalizes and validates an email address.
///
/// # Returns
/// - `Ok(String)` - The normalized address
/// - `Err(UserError::InvalidEmail)` - Empty, too long, or not an address
pub fn validate_email(email: &str) -> Result<String, UserError> {
    let email = normalize_email(email);

    if email.is_empty() || email.chars().count() > EMAIL_MAX_LENGTH || !EMAIL_RE.is_match(&email) {
        return Err(UserError::InvalidEmail);
    }

    Ok(email)
}

/// Checks a plaintext password against the minimum length.
///
/// Length is counted in characters, not bytes.
pub fn validate_password(password: &str) -> Result<(), UserError> {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(UserError::PasswordTooShort {
            min_length: PASSWORD_MIN_LENGTH,
        });
    }

    Ok(())
}

/// Trims an optional display name, mapping a missing name to the empty string.
pub fn validate_name(name: Option<&str>) -> Result<String, UserError> {
    let name = name.map(str::trim).unwrap_or_default();

    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(UserError::NameTooLong {
            max_length: NAME_MAX_LENGTH,
        });
    }

    Ok(name.to_string())
}
