//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Startup and request handling produce:
//!     → logging.rs (readiness + access lines on stdout)
//!     → tracing events (diagnostics on stderr, filtered by RUST_LOG)
//! ```

pub mod logging;
