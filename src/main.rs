//! Load-balanced demo server.
//!
//! Each instance reports its identity, hostname, and uptime so that the
//! load balancer in front of a pool of them can be observed at work.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client / LB health checker
//!            │
//!            ▼
//!     ┌─────────────┐    ┌──────────────────────────────────────┐
//!     │ net         │───▶│ http                                 │
//!     │ listener    │    │ request id → trace → access log →    │
//!     │ 0.0.0.0:PORT│    │ exact match → /, /health, /status,   │
//!     └─────────────┘    │ 404 fallback                         │
//!                        └──────────────────────────────────────┘
//!            ▲                        │ reads
//!            │                        ▼
//!     ┌─────────────┐    ┌──────────────────────────────────────┐
//!     │ config      │    │ host: hostname, process clock        │
//!     │ SERVER_ID,  │    └──────────────────────────────────────┘
//!     │ PORT        │
//!     └─────────────┘
//! ```

use std::process::ExitCode;

use lb_demo_server::config::ServerConfig;
use lb_demo_server::host::ProcessClock;
use lb_demo_server::http::HttpServer;
use lb_demo_server::lifecycle::{signals, Shutdown};
use lb_demo_server::net;
use lb_demo_server::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let clock = ProcessClock::start();
    logging::init_tracing();

    let config = ServerConfig::from_env();
    match serde_json::to_string(&config) {
        Ok(json) => tracing::info!(config = %json, "Configuration loaded"),
        Err(e) => tracing::warn!(error = %e, "Configuration loaded but not serializable"),
    }

    let listener = match net::bind(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Cannot start server");
            eprintln!("Server {} failed to start: {e}", config.server_id);
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        signals::forward_to(&signal_shutdown).await;
    });

    let server = HttpServer::new(config, clock);
    if let Err(e) = server.run(listener, server_shutdown).await {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
