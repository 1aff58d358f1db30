//! Response bodies and JSON serialization.
//!
//! # Responsibilities
//! - Define the JSON payload of every endpoint
//! - Serialize with pretty indentation and `Content-Type: application/json`
//!
//! # Design Decisions
//! - Field names and order are part of the wire contract; serde renames
//!   to camelCase and struct order is emission order
//! - `uptime` and `port` are numbers, everything else is a string

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Fixed greeting returned by `GET /`.
pub const GREETING: &str = "Hello from Load Balanced Server!";

/// Value of `status` in `GET /health`.
pub const HEALTHY: &str = "healthy";

/// Value of `error` in 404 bodies.
pub const NOT_FOUND: &str = "Not Found";

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Greeting {
    pub message: &'static str,
    pub server_id: String,
    pub timestamp: String,
    pub hostname: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: &'static str,
    pub server_id: String,
    pub uptime: f64,
}

/// Body of `GET /status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub server_id: String,
    pub port: u16,
    pub hostname: String,
    pub uptime: f64,
    pub timestamp: String,
}

/// Body of every unmatched request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFound {
    pub error: &'static str,
    pub server_id: String,
    pub path: String,
}

/// Pretty-printed JSON response.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
