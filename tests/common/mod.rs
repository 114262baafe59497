//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use numeric_api::compute::{Compute, NativeCompute};
use numeric_api::config::ServiceConfig;
use numeric_api::http::HttpServer;
use numeric_api::lifecycle::Shutdown;
use tokio::task::JoinHandle;

/// A server running on an ephemeral port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server with the native provider and default config.
#[allow(dead_code)]
pub async fn start_server() -> TestServer {
    start_server_with(ServiceConfig::default(), Arc::new(NativeCompute)).await
}

/// Start a server with the given config and provider.
#[allow(dead_code)]
pub async fn start_server_with(mut config: ServiceConfig, compute: Arc<dyn Compute>) -> TestServer {
    config.listener.bind_address = "127.0.0.1:0".into();
    let listener = numeric_api::net::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::with_compute(config, compute);
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// A client that never reuses pooled connections across tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
