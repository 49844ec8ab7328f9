//! Tests for the create_user endpoint.
//!
//! This module verifies account creation on a valid payload, rejection of duplicate emails
//! and short passwords with no account written, and the shape of the response body.

use accounts::{
    model::user::CreateUserDto,
    server::{controller::user::create_user, util::password::verify_password},
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::*;
use crate::util::json_body;

fn payload(name: Option<&str>, email: &str, password: &str) -> CreateUserDto {
    CreateUserDto {
        name: name.map(str::to_string),
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Tests successful creation with a valid payload.
///
/// Verifies the endpoint returns 201 CREATED, the stored password verifies against the
/// plaintext without being equal to it, and the response body has no password field.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn creates_user_for_valid_payload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        Ok(Json(payload(
            Some(TEST_USER_NAME),
            TEST_USER_EMAIL,
            TEST_USER_PASSWORD,
        ))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = json_body(resp).await?;
    assert_eq!(body["email"], TEST_USER_EMAIL);
    assert_eq!(body["name"], TEST_USER_NAME);
    assert!(body.get("password").is_none());

    let user = test.user().find_by_email(TEST_USER_EMAIL).await?.unwrap();
    assert_ne!(user.password, TEST_USER_PASSWORD);
    assert!(verify_password(TEST_USER_PASSWORD, &user.password));

    Ok(())
}

/// Tests rejection of an email that already has an account.
///
/// Verifies the endpoint returns 400 BAD REQUEST and exactly one account exists for the email
/// afterwards.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user(TEST_USER_EMAIL, TEST_USER_PASSWORD)
        .build()
        .await?;

    let result = create_user(
        State(test.into_app_state()),
        Ok(Json(payload(None, TEST_USER_EMAIL, TEST_USER_PASSWORD))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test.user().count_by_email(TEST_USER_EMAIL).await?, 1);

    Ok(())
}

/// Tests rejection of the second of two identical registrations.
///
/// Expected: 201 CREATED then 400 BAD_REQUEST, one account stored
#[tokio::test]
async fn bad_request_for_repeated_registration() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let first = create_user(
        State(test.into_app_state()),
        Ok(Json(payload(None, TEST_USER_EMAIL, TEST_USER_PASSWORD))),
    )
    .await
    .into_response();
    let second = create_user(
        State(test.into_app_state()),
        Ok(Json(payload(None, TEST_USER_EMAIL, TEST_USER_PASSWORD))),
    )
    .await
    .into_response();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test.user().count_by_email(TEST_USER_EMAIL).await?, 1);

    Ok(())
}

/// Tests rejection of a password below the minimum length.
///
/// Verifies the endpoint returns 400 BAD REQUEST and no account exists for the email
/// afterwards.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_for_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        Ok(Json(payload(None, TEST_USER_EMAIL, "pw"))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = json_body(resp).await?;
    assert!(body["error"].is_string());
    assert!(test.user().find_by_email(TEST_USER_EMAIL).await?.is_none());

    Ok(())
}

/// Tests rejection of a malformed email address.
///
/// Expected: Err with 400 BAD_REQUEST response, no account stored
#[tokio::test]
async fn bad_request_for_invalid_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        Ok(Json(payload(None, "test@", TEST_USER_PASSWORD))),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);
    assert_eq!(test.user().count().await?, 0);

    Ok(())
}

/// Tests 500 response when the account store is unavailable.
///
/// Uses a database without the user tables so the existence check fails.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = create_user(
        State(test.into_app_state()),
        Ok(Json(payload(None, TEST_USER_EMAIL, TEST_USER_PASSWORD))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
