//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use overload_mock::config::MockConfig;
use overload_mock::health::ServiceState;
use overload_mock::http::MockServer;
use overload_mock::lifecycle::{self, Shutdown};

/// A mock instance running on an ephemeral loopback port.
pub struct RunningMock {
    pub addr: SocketAddr,
    pub service: Arc<ServiceState>,
    pub shutdown: Shutdown,
}

impl RunningMock {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for RunningMock {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a mock with the given overload delay and return once it is bound.
pub async fn start_mock(delay_secs: u64) -> RunningMock {
    let mut config = MockConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.overload.delay_secs = delay_secs;
    config.timeouts.request_secs = delay_secs + 10;

    let listener = lifecycle::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let service = Arc::new(ServiceState::new());
    let shutdown = Shutdown::new();
    let server = MockServer::new(config, service.clone());
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    RunningMock {
        addr,
        service,
        shutdown,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
