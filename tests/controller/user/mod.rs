//! Tests for user controller endpoints.

mod create_user;

use super::*;
