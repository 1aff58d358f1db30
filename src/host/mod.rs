//! Host and process metadata.
//!
//! Everything here is read fresh on every call: the hostname may change
//! between requests and uptime is recomputed from a monotonic clock.

pub mod clock;

pub use clock::ProcessClock;

/// Reported when the OS refuses to tell us its hostname.
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Current OS hostname.
pub fn hostname() -> String {
    match ::hostname::get() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::debug!(error = %e, "Hostname lookup failed");
            UNKNOWN_HOSTNAME.to_string()
        }
    }
}
