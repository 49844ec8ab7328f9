//! Error types for the accounts server.
//!
//! This module provides the error handling system for the service: domain-specific error types
//! for user input and configuration, a top-level [`Error`] aggregating them with library errors,
//! and `IntoResponse` implementations mapping each to an HTTP response. Errors use `thiserror`
//! for `Display` and `Error` trait implementations.

pub mod config;
pub mod retry;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, user::UserError},
};

/// Main error type for the accounts server.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type. `#[from]` enables conversion through the `?` operator, and the `IntoResponse`
/// implementation maps errors to HTTP responses for API consumers.
///
/// # Error Categories
/// - User errors (rejected registration input)
/// - Configuration errors (missing/invalid environment variables)
/// - External library errors (database, password hashing, blocking task, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// User input rejected by registration (duplicate email, short password, bad payload).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Internal error indicating a bug in the service's code.
    ///
    /// This error should never occur in normal operation.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Password hashing error (invalid parameters, malformed stored hash).
    #[error(transparent)]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// Blocking task failed to complete (panicked or was cancelled).
    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For rejected user input
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::UserError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
