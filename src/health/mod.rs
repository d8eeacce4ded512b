//! Health state subsystem.
//!
//! # Data Flow
//! ```text
//! lifecycle (listener bound) ──mark_ready──▶ state.rs
//! admin handlers ─────────────set_mode────▶ state.rs
//! every handler ◀─────────────read flags─── state.rs
//! ```

pub mod state;

pub use state::{Mode, Readiness, ServiceState};
