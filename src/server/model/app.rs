//! Application state shared across handlers.

use sea_orm::DatabaseConnection;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the account store
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
