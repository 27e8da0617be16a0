//! Shared utilities for integration testing.

use std::net::SocketAddr;

use kenetg_backend::config::ServerConfig;
use kenetg_backend::http::ApiServer;
use kenetg_backend::lifecycle::Shutdown;
use kenetg_backend::net;
use tokio::task::JoinHandle;

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Bind `127.0.0.1:0` and serve the stub API in the background.
pub async fn start_server() -> TestServer {
    let config = ServerConfig {
        bind_host: "127.0.0.1".into(),
        port: 0,
    };
    let listener = net::bind(&config).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = ApiServer::new(config);
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        server.run(listener, server_shutdown).await.unwrap();
    });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Client without pooling or system proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
