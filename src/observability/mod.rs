//! Observability subsystem.
//!
//! Structured logs only: every route emits one event naming itself, state
//! transitions are logged where they happen, and `tower_http` traces each
//! request with its `x-request-id`.

pub mod logging;

pub use logging::init_logging;
