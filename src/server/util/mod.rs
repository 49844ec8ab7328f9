//! Utility functions and helpers for server operations.
//!
//! Password hashing and verification, and validation and normalization of registration input.
//! These are used by the user service before anything is written to the account store.

pub mod password;
pub mod validate;
