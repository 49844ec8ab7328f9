//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, verifying status codes, response
//! bodies and the resulting state of the account store.

mod user;

use accounts_test_utils::prelude::*;

use crate::util::TestContextExt;
