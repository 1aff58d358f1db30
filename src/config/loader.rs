//! Configuration loading from the process environment.

use crate::config::schema::{ServerConfig, DEFAULT_PORT, DEFAULT_SERVER_ID};

/// Environment variable holding the instance identity.
pub const SERVER_ID_VAR: &str = "SERVER_ID";

/// Environment variable holding the listening port.
pub const PORT_VAR: &str = "PORT";

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Missing or malformed values never fail: they fall back to the
    /// defaults, with a warning for a `PORT` that was set but unusable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_id = lookup(SERVER_ID_VAR)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_ID.to_string());

        let port = match lookup(PORT_VAR) {
            Some(raw) if !raw.trim().is_empty() => parse_port(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    value = %raw,
                    fallback = DEFAULT_PORT,
                    "Ignoring invalid PORT value"
                );
                DEFAULT_PORT
            }),
            _ => DEFAULT_PORT,
        };

        Self { server_id, port }
    }
}

/// Parse a positive TCP port number.
fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse::<u16>().ok().filter(|port| *port > 0)
}
