//! User account endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::{user::UserError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag grouping user endpoints
pub static USER_TAG: &str = "user";

/// Create a new user account
///
/// Public endpoint, no session required. The password is stored as a one-way hash and never
/// included in the response.
#[utoipa::path(
    post,
    path = "/api/user/create",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User account created", body = UserDto),
        (status = 400, description = "Email already registered, password too short, or invalid payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) =
        payload.map_err(|rejection| UserError::InvalidPayload(rejection.body_text()))?;

    let user_service = UserService::new(&state.db);
    let user = user_service.create_user(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
