//! Shared utilities for integration and load testing.

use std::net::SocketAddr;

use lb_demo_server::config::ServerConfig;
use lb_demo_server::host::ProcessClock;
use lb_demo_server::http::HttpServer;
use lb_demo_server::lifecycle::Shutdown;
use lb_demo_server::net;

/// A server running on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server reporting `server_id` and `port`.
///
/// The listener binds `127.0.0.1:0`; `port` only affects what `/status`
/// reports, so tests can assert on it without owning a fixed port.
pub async fn start_server(server_id: &str, port: u16) -> TestServer {
    let config = ServerConfig {
        server_id: server_id.to_string(),
        port,
    };
    let listener = net::bind_addr(SocketAddr::from(([127, 0, 0, 1], 0)), &config)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, ProcessClock::start());
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Client that never pools connections or goes through a proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
