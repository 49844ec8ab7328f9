//! Test fixture modules for database record creation.
//!
//! - `user` - user account records and in-memory user models

pub mod user;
