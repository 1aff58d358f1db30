//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! SERVER_ID / PORT environment variables
//!     → loader.rs (read, apply defaults)
//!     → ServerConfig (immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never reloaded
//! - Malformed values fall back to defaults instead of failing startup

pub mod loader;
pub mod schema;

pub use loader::{PORT_VAR, SERVER_ID_VAR};
pub use schema::{ServerConfig, DEFAULT_PORT, DEFAULT_SERVER_ID};
