//! Standard values shared across tests.
//!
//! These are placeholder credentials for fixtures and request payloads, never real ones.

/// Connection string for the per-test in-memory SQLite database.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Email address used by default user fixtures and payloads.
pub static TEST_USER_EMAIL: &str = "test@example.com";

/// Display name used by default user fixtures and payloads.
pub static TEST_USER_NAME: &str = "Testy McTest";

/// Password used by default user fixtures and payloads.
///
/// Long enough to pass the registration length check.
pub static TEST_USER_PASSWORD: &str = "testpass";
