//! Endpoint handlers.
//!
//! Each handler is a synchronous read of immutable state plus a fresh
//! timestamp, hostname, or uptime sample.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::host;
use crate::http::request::request_target;
use crate::http::response::{
    Greeting, Health, NotFound, PrettyJson, Status, GREETING, HEALTHY, NOT_FOUND,
};
use crate::http::server::AppState;
use crate::observability::logging::iso_timestamp;

/// `GET /`
pub async fn root(State(state): State<AppState>) -> PrettyJson<Greeting> {
    PrettyJson(Greeting {
        message: GREETING,
        server_id: state.config.server_id.clone(),
        timestamp: iso_timestamp(),
        hostname: host::hostname(),
    })
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> PrettyJson<Health> {
    PrettyJson(Health {
        status: HEALTHY,
        server_id: state.config.server_id.clone(),
        uptime: state.clock.uptime_secs(),
    })
}

/// `GET /status`
pub async fn status(State(state): State<AppState>) -> PrettyJson<Status> {
    PrettyJson(Status {
        server_id: state.config.server_id.clone(),
        port: state.config.port,
        hostname: host::hostname(),
        uptime: state.clock.uptime_secs(),
        timestamp: iso_timestamp(),
    })
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    not_found_response(&state, &uri)
}

/// 404 body echoing the request target exactly as received.
pub fn not_found_response(state: &AppState, uri: &Uri) -> Response {
    let body = NotFound {
        error: NOT_FOUND,
        server_id: state.config.server_id.clone(),
        path: request_target(uri).into_owned(),
    };
    (StatusCode::NOT_FOUND, PrettyJson(body)).into_response()
}
