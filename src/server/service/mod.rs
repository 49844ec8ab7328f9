//! Service layer for business logic and orchestration.
//!
//! Services validate input, coordinate repositories inside transactions, and retry operations
//! that fail for transient reasons.

pub mod retry;
pub mod user;
