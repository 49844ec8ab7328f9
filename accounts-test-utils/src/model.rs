//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main accounts crate so fixtures and assertions read the
//! same on both sides.

/// Type alias for the user account database model.
pub type UserModel = entity::account_user::Model;
