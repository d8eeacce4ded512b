//! Configuration validation.
//!
//! # Responsibilities
//! - Check the bind address parses
//! - Validate value ranges (delay > 0)
//! - Ensure the request timeout outlasts the overload delay
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MockConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::MockConfig;

/// A single semantic problem in a [`MockConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("bind address `{0}` is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("overload delay must be greater than zero")]
    ZeroOverloadDelay,

    #[error("request timeout ({timeout_secs}s) must exceed the overload delay ({delay_secs}s)")]
    TimeoutShorterThanDelay { timeout_secs: u64, delay_secs: u64 },
}

pub fn validate_config(config: &MockConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let address = config.listener.bind_address();
    if address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(address));
    }

    if config.overload.delay_secs == 0 {
        errors.push(ValidationError::ZeroOverloadDelay);
    }

    // The timeout layer would otherwise answer 408 before the delayed 503 fires.
    if config.timeouts.request_secs <= config.overload.delay_secs {
        errors.push(ValidationError::TimeoutShorterThanDelay {
            timeout_secs: config.timeouts.request_secs,
            delay_secs: config.overload.delay_secs,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
