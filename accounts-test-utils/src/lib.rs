//! Shared test harness for the accounts workspace.
//!
//! Tests build an isolated environment with [`TestBuilder`], which creates an in-memory
//! SQLite database, the requested tables and any user fixtures, then hands back a
//! [`TestContext`] for the test body to work against.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_USER_EMAIL, TEST_USER_NAME, TEST_USER_PASSWORD},
        fixtures::user::factory,
        TestBuilder, TestContext, TestError,
    };
}
