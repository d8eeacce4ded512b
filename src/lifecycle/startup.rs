//! Startup orchestration.
//!
//! The service reports Starting until it holds a bound listener. A bind
//! failure (port in use, permission denied) is fatal and leaves the
//! readiness flag untouched.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::{ListenerConfig, MockConfig, ValidationError};
use crate::health::ServiceState;
use crate::http::MockServer;

/// Fatal startup or serving failure.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bind the configured listener.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let address = config.bind_address();
    TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })
}

/// Bind, mark ready, and serve until `shutdown` fires.
pub async fn start(
    config: MockConfig,
    service: Arc<ServiceState>,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    tracing::info!("Service is not yet ready");

    let listener = match bind(&config.listener).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e);
        }
    };

    MockServer::new(config, service).run(listener, shutdown).await?;
    Ok(())
}
