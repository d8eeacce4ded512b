//! Service health state.
//!
//! # States
//! - Readiness: Starting → Ready (one way, on listener bind)
//! - Mode: Normal ⇄ Overloaded (toggled by the admin endpoints)
//!
//! # State Transitions
//! ```text
//! Starting → Ready:        listener bound
//! Normal → Overloaded:     POST /fakeerrormodeon
//! Overloaded → Normal:     POST /fakeerrormodeoff
//! ```
//!
//! # Design Decisions
//! - One atomic boolean per flag; no cross-flag ordering is needed
//! - Shared via Arc so several isolated instances can run in one process
//! - Only real changes are logged at info

use std::sync::atomic::{AtomicBool, Ordering};

/// Startup progress of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Starting,
    Ready,
}

/// Simulated load mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Overloaded,
}

/// The two process-wide flags every handler reads.
#[derive(Debug, Default)]
pub struct ServiceState {
    ready: AtomicBool,
    overloaded: AtomicBool,
}

impl ServiceState {
    /// Create a state in Starting / Normal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state in Starting with the given initial mode.
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            ready: AtomicBool::new(false),
            overloaded: AtomicBool::new(mode == Mode::Overloaded),
        }
    }

    pub fn readiness(&self) -> Readiness {
        if self.ready.load(Ordering::Acquire) {
            Readiness::Ready
        } else {
            Readiness::Starting
        }
    }

    pub fn is_ready(&self) -> bool {
        self.readiness() == Readiness::Ready
    }

    /// Record that startup completed. Never reverts.
    pub fn mark_ready(&self) {
        if !self.ready.swap(true, Ordering::AcqRel) {
            tracing::info!("Service is ready");
        }
    }

    pub fn mode(&self) -> Mode {
        if self.overloaded.load(Ordering::Acquire) {
            Mode::Overloaded
        } else {
            Mode::Normal
        }
    }

    pub fn is_overloaded(&self) -> bool {
        self.mode() == Mode::Overloaded
    }

    /// Switch the simulated load mode. Returns the previous mode.
    pub fn set_mode(&self, mode: Mode) -> Mode {
        let previous = if self.overloaded.swap(mode == Mode::Overloaded, Ordering::AcqRel) {
            Mode::Overloaded
        } else {
            Mode::Normal
        };

        if previous != mode {
            tracing::info!(from = ?previous, to = ?mode, "Overload mode changed");
        } else {
            tracing::debug!(mode = ?mode, "Overload mode unchanged");
        }
        previous
    }

    /// Whether `/ready` should report healthy.
    pub fn accepts_traffic(&self) -> bool {
        !self.is_overloaded() && self.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_ready_and_normal() {
        let state = ServiceState::new();
        assert_eq!(state.readiness(), Readiness::Starting);
        assert_eq!(state.mode(), Mode::Normal);
        assert!(!state.accepts_traffic());
    }

    #[test]
    fn ready_is_one_way() {
        let state = ServiceState::new();
        state.mark_ready();
        state.mark_ready();
        state.set_mode(Mode::Overloaded);
        state.set_mode(Mode::Normal);
        assert!(state.is_ready());
    }

    #[test]
    fn toggles_are_idempotent() {
        let state = ServiceState::new();
        assert_eq!(state.set_mode(Mode::Overloaded), Mode::Normal);
        assert_eq!(state.set_mode(Mode::Overloaded), Mode::Overloaded);
        assert!(state.is_overloaded());

        assert_eq!(state.set_mode(Mode::Normal), Mode::Overloaded);
        assert_eq!(state.set_mode(Mode::Normal), Mode::Normal);
        assert!(!state.is_overloaded());
    }

    #[test]
    fn accepts_traffic_requires_ready_and_normal() {
        let state = ServiceState::with_mode(Mode::Overloaded);
        assert!(!state.accepts_traffic());

        state.mark_ready();
        assert!(!state.accepts_traffic());

        state.set_mode(Mode::Normal);
        assert!(state.accepts_traffic());
    }
}
