//! Configuration schema definitions.
//!
//! The server has exactly two knobs, both read once at startup. The
//! effective configuration is logged as JSON once it is loaded.

use serde::Serialize;
use std::net::{Ipv4Addr, SocketAddr};

/// Identity reported when `SERVER_ID` is absent or empty.
pub const DEFAULT_SERVER_ID: &str = "unknown";

/// Port used when `PORT` is absent, empty, or not a valid port number.
pub const DEFAULT_PORT: u16 = 3000;

/// Root configuration for a server instance.
///
/// Immutable once loaded; shared via `Arc` with every request handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Instance identity reported in every response body.
    pub server_id: String,

    /// Listening port.
    pub port: u16,
}

impl ServerConfig {
    /// Address the listener binds: all interfaces at the configured port.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_id: DEFAULT_SERVER_ID.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
