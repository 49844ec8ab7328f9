//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, organized by domain.
//! They are generic over [`sea_orm::ConnectionTrait`] so the same queries run on a pooled
//! connection or inside a transaction.

pub mod user;
