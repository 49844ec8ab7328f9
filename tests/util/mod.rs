//! Shared helpers for integration tests.

use accounts::server::model::app::AppState;
use accounts_test_utils::{TestContext, TestError};
use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;

/// Extension trait for TestContext to create the application state
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Build a JSON POST request for `uri`
pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

/// Collect a response body and parse it as JSON
pub async fn json_body(resp: Response) -> Result<serde_json::Value, TestError> {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}
