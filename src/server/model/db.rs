//! Database model type aliases.
//!
//! Type aliases for SeaORM entity models used throughout the application, so signatures don't
//! need to reach into the generated `entity` crate directly.

use crate::model::user::UserDto;

/// Type alias for the user account database model.
///
/// # Fields (from `entity::account_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Normalized email address, unique across accounts
/// - `name` - Display name, empty when none was given
/// - `password` - Argon2id PHC hash of the password
/// - `is_active` - Whether the account may be used
/// - `is_staff` - Whether the account has administrative access
/// - `is_superuser` - Whether the account has every permission
/// - `created_at` - Timestamp when the account was created
pub type UserModel = entity::account_user::Model;

/// Converts a stored account into its API representation, dropping the password hash.
impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            email: user.email,
            name: user.name,
        }
    }
}
