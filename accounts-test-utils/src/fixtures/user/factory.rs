//! Factory functions for registration payloads.
//!
//! Pure functions with standard test values; nothing here touches the database.

use serde_json::{json, Value};

use crate::constant::{TEST_USER_EMAIL, TEST_USER_NAME, TEST_USER_PASSWORD};

/// Registration payload with the standard name, email and password.
pub fn create_user_payload() -> Value {
    json!({
        "name": TEST_USER_NAME,
        "email": TEST_USER_EMAIL,
        "password": TEST_USER_PASSWORD,
    })
}

/// Registration payload with only the required fields.
pub fn create_user_payload_with(email: &str, password: &str) -> Value {
    json!({
        "email": email,
        "password": password,
    })
}
