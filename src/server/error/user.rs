//! Errors for rejected registration input.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Registration input rejected before or during account creation.
///
/// Every variant is reported as 400 Bad Request and leaves the account store untouched.
#[derive(Error, Debug)]
pub enum UserError {
    /// An account is already registered under the email
    ///
    /// The message never includes the address.
    #[error("A user with this email already exists")]
    DuplicateEmail(String),
    /// Password has fewer than `min_length` characters
    #[error("Password must be at least {min_length} characters long")]
    PasswordTooShort { min_length: usize },
    /// Email is empty, too long, or not an address
    #[error("Enter a valid email address")]
    InvalidEmail,
    /// Display name exceeds `max_length` characters
    #[error("Name must be at most {max_length} characters long")]
    NameTooLong { max_length: usize },
    /// Request body is not valid JSON or lacks a required field
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected user registration: {}", self);

        let error = self.to_string();

        (StatusCode::BAD_REQUEST, Json(ErrorDto { error })).into_response()
    }
}
