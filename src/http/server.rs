//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the five mock routes
//! - Wire up middleware (tracing, request timeout, request ID)
//! - Mark the service ready once it owns a bound listener
//! - Serve until shutdown, draining in-flight requests

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::MockConfig;
use crate::health::ServiceState;
use crate::http::connect::ConnectionAddrs;
use crate::http::handlers::{alive, fake_error_mode_off, fake_error_mode_on, ready, work};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ServiceState>,
    pub overload_delay: Duration,
}

/// HTTP server for the mock service.
pub struct MockServer {
    router: Router,
    config: MockConfig,
    service: Arc<ServiceState>,
}

impl MockServer {
    /// Create a new server sharing the given state.
    pub fn new(config: MockConfig, service: Arc<ServiceState>) -> Self {
        let router = build_router(&config, service.clone());
        Self {
            router,
            config,
            service,
        }
    }

    /// Run the server on an already bound listener until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        self.service.mark_ready();
        tracing::info!(address = %addr, "Running on http://{}", addr);

        let app = self
            .router
            .into_make_service_with_connect_info::<ConnectionAddrs>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// Get the shared service state.
    pub fn state(&self) -> &Arc<ServiceState> {
        &self.service
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &MockConfig, service: Arc<ServiceState>) -> Router {
    let state = AppState {
        service,
        overload_delay: config.overload.delay(),
    };

    Router::new()
        .route("/alive", get(alive))
        .route("/ready", get(ready))
        .route("/", get(work))
        .route("/fakeerrormodeon", post(fake_error_mode_on))
        .route("/fakeerrormodeoff", post(fake_error_mode_off))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
