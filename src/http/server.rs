//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the four endpoints
//! - Wire up middleware (request ID, tracing, timeout, access log, exact match)
//! - Serve on a bound listener until shutdown

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::host::ProcessClock;
use crate::http::handlers::{health, not_found, root, status};
use crate::http::request::{access_log, exact_match, MakeRequestUuid, X_REQUEST_ID};

/// Upper bound on a single request; handlers never come close.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub clock: ProcessClock,
}

/// HTTP server for one load-balanced instance.
pub struct HttpServer {
    router: Router,
    config: Arc<ServerConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// `clock` should be the clock captured at process start so that
    /// `uptime` covers the whole process lifetime.
    pub fn new(config: ServerConfig, clock: ProcessClock) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
            clock,
        };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Unsupported methods on a known path fall back to the same 404 as
    /// unknown paths instead of axum's 405.
    #[allow(deprecated)]
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(root).fallback(not_found))
            .route("/health", get(health).fallback(not_found))
            .route("/status", get(status).fallback(not_found))
            .fallback(not_found)
            .layer(middleware::from_fn_with_state(state.clone(), exact_match))
            .layer(middleware::from_fn_with_state(state.clone(), access_log))
            .with_state(state)
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires. In-flight requests are drained first.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            server_id = %self.config.server_id,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
