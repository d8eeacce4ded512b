//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line flags / OVERLOAD_MOCK_* env vars
//!     → loader.rs (clap parse)
//!     → validation.rs (semantic checks)
//!     → MockConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - No config files; every knob is a flag with an env fallback
//! - All fields have defaults that reproduce the stock mock
//! - Validation separates syntactic (clap) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, MockArgs};
pub use schema::{ListenerConfig, LogFormat, MockConfig, ObservabilityConfig, OverloadConfig};
pub use validation::ValidationError;
