//! TCP listener binding.
//!
//! # Responsibilities
//! - Bind to all interfaces at the configured port
//! - Surface bind failures (port in use, insufficient privilege) as errors
//! - Announce readiness once the socket is bound

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::observability::logging;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the listener for `config`.
///
/// Prints the readiness line only after the socket is bound, so a caller
/// polling stdout never sees it for a server that cannot accept traffic.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ListenerError> {
    bind_addr(config.bind_address(), config).await
}

/// Bind an explicit address while reporting `config`'s identity.
///
/// Used by tests to bind loopback on an ephemeral port.
pub async fn bind_addr(addr: SocketAddr, config: &ServerConfig) -> Result<TcpListener, ListenerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { addr, source })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ListenerError::Bind { addr, source })?;

    tracing::info!(
        address = %local_addr,
        server_id = %config.server_id,
        "Listener bound"
    );
    logging::announce_ready(&config.server_id, local_addr.port());

    Ok(listener)
}
