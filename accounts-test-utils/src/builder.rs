//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and queued, then executed in order during the final
//! `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up the database tables and user fixtures a test needs, finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    include_user_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, String)>, // (email, password)
}

impl TestBuilder {
    /// Create a builder with no tables and no fixtures.
    pub fn new() -> Self {
        Self {
            include_user_tables: false,
            users: Vec::new(),
        }
    }

    /// Create every table the user account store needs.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Insert a user account with the given email and plaintext password.
    ///
    /// The password is hashed before insertion, the same way registration stores it.
    pub fn with_user(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.push((email.into(), password.into()));
        self
    }

    /// Build the test context.
    ///
    /// 1. Connects to a fresh in-memory database
    /// 2. Creates tables
    /// 3. Inserts user fixtures
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::PasswordHashError)` - Hashing a fixture password failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut tables = Vec::new();

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::AccountUser));
        }

        setup.with_tables(tables).await?;

        for (email, password) in self.users {
            setup.user().insert_user(&email, &password).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
