//! Classification of errors for the retry loop.

use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently (bad request, bug, misconfiguration)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient, should retry
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query errors, constraint violations, type conversion and schema errors
                // won't resolve with a retry
                _ => ErrorRetryStrategy::Fail,
            },

            // User errors - permanent failures, the same input is rejected again
            Self::UserError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (bug in the service's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,

            // Hashing errors - invalid parameters or a malformed stored hash
            Self::PasswordHashError(_) => ErrorRetryStrategy::Fail,

            // Blocking task panicked or was cancelled
            Self::JoinError(_) => ErrorRetryStrategy::Fail,

            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
