//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig
//!     → listener.rs (bind 0.0.0.0:<port>, announce readiness)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - Bind failure is fatal; there is no retry
//! - Connection handling is left to hyper's task-per-connection model

pub mod listener;

pub use listener::{bind, bind_addr, ListenerError};
