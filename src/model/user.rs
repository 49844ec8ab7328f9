use serde::{Deserialize, Serialize};

/// Payload for creating a user account
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Email address, unique across accounts
    pub email: String,
    /// Plaintext password, only ever stored as a hash
    pub password: String,
}

/// A user account as returned by the API
///
/// Never carries the password or its hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    /// Normalized email address
    pub email: String,
    /// Display name, empty when none was given
    pub name: String,
}
