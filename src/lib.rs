//! Overload mock: an HTTP test double for circuit breakers.
//!
//! Serves a liveness probe, a readiness probe, a work endpoint and two
//! admin toggles. Flipping the service into overloaded mode makes the
//! readiness probe report busy and the work endpoint fail slowly.

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::MockConfig;
pub use health::ServiceState;
pub use http::MockServer;
pub use lifecycle::Shutdown;
