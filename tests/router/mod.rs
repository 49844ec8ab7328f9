//! Tests for the assembled router.
//!
//! Requests go through the full middleware stack and JSON extraction with
//! `tower::ServiceExt::oneshot`, the way a real client would hit the server.

mod create_user;

use accounts::server::startup::build_router;
use accounts_test_utils::prelude::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use crate::util::{json_body, post_json};

static CREATE_USER_URL: &str = "/api/user/create";
