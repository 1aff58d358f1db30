//! Load-balanced demo server library.

pub mod config;
pub mod host;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod probe;

pub use config::ServerConfig;
pub use host::ProcessClock;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
