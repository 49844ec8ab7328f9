//! HTTP controller endpoints for the accounts web API.
//!
//! Axum handlers that decode requests, call into services, and return HTTP responses. Each
//! handler carries a utoipa annotation for the OpenAPI document.

pub mod user;
