//! Overload mock service.
//!
//! ```text
//!   circuit breaker / LB ──GET /ready──▶ ┌──────────────────────────┐
//!   client traffic ───────GET /────────▶ │       overload-mock      │
//!   orchestrator ─────────GET /alive───▶ │  ready: Starting→Ready   │
//!   test harness ──POST /fakeerrormode*▶ │  mode:  Normal⇄Overloaded│
//!                                        └──────────────────────────┘
//! ```

use std::sync::Arc;

use clap::Parser;

use overload_mock::config::{load_config, MockArgs};
use overload_mock::health::{Mode, ServiceState};
use overload_mock::lifecycle::{self, Shutdown, StartupError};
use overload_mock::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = MockArgs::parse();
    init_logging(&args.log_level, args.log_format)?;

    tracing::info!("overload-mock v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config(args).map_err(|errors| {
        let err = StartupError::InvalidConfig(errors);
        tracing::error!(error = %err, "Configuration rejected");
        err
    })?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        overload_delay_secs = config.overload.delay_secs,
        request_timeout_secs = config.timeouts.request_secs,
        start_overloaded = config.overload.start_overloaded,
        "Configuration loaded"
    );

    let mode = if config.overload.start_overloaded {
        Mode::Overloaded
    } else {
        Mode::Normal
    };
    let service = Arc::new(ServiceState::with_mode(mode));

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    lifecycle::start(config, service, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
