//! One-way password hashing.
//!
//! Passwords are hashed with Argon2id using a random per-password salt and stored as PHC
//! strings (`$argon2id$v=19$...`), which carry the algorithm parameters and salt alongside the
//! hash so verification needs nothing but the stored value.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::Error;

/// Hashes a plaintext password into a PHC string.
///
/// # Arguments
/// - `password` - Plaintext password to hash
///
/// # Returns
/// - `Ok(String)` - PHC-formatted Argon2id hash
/// - `Err(Error::PasswordHashError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Hashes a password on the blocking thread pool.
///
/// Argon2 is deliberately expensive, so async callers go through this instead of calling
/// [`hash_password`] on a runtime worker thread.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted Argon2id hash
/// - `Err(Error::PasswordHashError)` - Hashing failed
/// - `Err(Error::JoinError)` - The blocking task panicked or was cancelled
pub async fn hash_password_blocking(password: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

/// Checks a plaintext password against a stored PHC hash.
///
/// Returns `false` both for a wrong password and for a stored value that isn't a valid PHC
/// string.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
