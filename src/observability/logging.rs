//! Structured logging and the stdout log contract.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber (diagnostics, stderr)
//! - Write the readiness line and one access line per request (stdout)
//!
//! Access and readiness lines have a fixed format that external tooling
//! greps for, so they bypass the `tracing` formatter. Write failures on
//! stdout are ignored: a closed stream must never fail a request.

use chrono::{SecondsFormat, Utc};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "lb_demo_server=info,tower_http=info";

/// Initialize the global tracing subscriber.
///
/// Diagnostics go to stderr so stdout carries only the contract lines.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Current UTC time in ISO-8601 with millisecond precision, e.g.
/// `2024-05-01T12:00:00.123Z`.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `Server <id> is running on port <port>`
pub fn ready_line(server_id: &str, port: u16) -> String {
    format!("Server {server_id} is running on port {port}")
}

/// `[Server <id>] <timestamp> - <METHOD> <target>`
pub fn access_line(server_id: &str, timestamp: &str, method: &str, target: &str) -> String {
    format!("[Server {server_id}] {timestamp} - {method} {target}")
}

/// Print the readiness line to stdout.
pub fn announce_ready(server_id: &str, port: u16) {
    emit(&ready_line(server_id, port));
}

/// Print one access line to stdout, stamped with the current time.
pub fn log_access(server_id: &str, method: &str, target: &str) {
    emit(&access_line(server_id, &iso_timestamp(), method, target));
}

fn emit(line: &str) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_ready_line_format() {
        assert_eq!(ready_line("a", 3000), "Server a is running on port 3000");
    }

    #[test]
    fn test_access_line_format() {
        assert_eq!(
            access_line("2", "2024-05-01T12:00:00.123Z", "GET", "/health"),
            "[Server 2] 2024-05-01T12:00:00.123Z - GET /health"
        );
    }

    #[test]
    fn test_iso_timestamp_shape() {
        let ts = iso_timestamp();
        assert!(ts.ends_with('Z'), "{ts}");
        // YYYY-MM-DDTHH:MM:SS.mmmZ
        assert_eq!(ts.len(), 24, "{ts}");
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
