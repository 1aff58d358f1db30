//! Request-side middleware.
//!
//! # Responsibilities
//! - Generate a request ID (UUID v4) for log correlation
//! - Write one access line per request before dispatch
//! - Enforce exact-string routing on the request target
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The request target (path plus query) is logged and echoed verbatim
//! - No path normalization: `/status/` and `/?x=1` never reach a handler

use std::borrow::Cow;

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue, Uri},
    middleware::Next,
    response::Response,
};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::handlers::not_found_response;
use crate::http::server::AppState;
use crate::observability::logging;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates a fresh UUID v4 for requests that arrive without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Request target as it appeared on the request line.
///
/// Origin-form yields path plus query. Absolute-form (`GET http://host/x`)
/// keeps scheme and authority.
pub fn request_target(uri: &Uri) -> Cow<'_, str> {
    match uri.path_and_query() {
        Some(pq) if uri.scheme().is_none() => Cow::Borrowed(pq.as_str()),
        _ => Cow::Owned(uri.to_string()),
    }
}

/// Write the access line, then dispatch.
pub async fn access_log(State(state): State<AppState>, request: Request, next: Next) -> Response {
    logging::log_access(
        &state.config.server_id,
        request.method().as_str(),
        &request_target(request.uri()),
    );
    next.run(request).await
}

/// Answer 404 for any request target carrying a query string.
///
/// Routing matches on the path alone, so without this `/?x=1` would be
/// served by the `/` handler.
pub async fn exact_match(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if request.uri().query().is_some() {
        tracing::debug!(target_uri = %request.uri(), "Query string on request target; not routing");
        return not_found_response(&state, request.uri());
    }
    next.run(request).await
}
