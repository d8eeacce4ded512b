//! Configuration loading from command-line flags and environment.

use clap::Parser;

use crate::config::schema::{
    ListenerConfig, LogFormat, MockConfig, ObservabilityConfig, OverloadConfig, TimeoutConfig,
};
use crate::config::validation::{validate_config, ValidationError};

/// Command-line interface of the mock service.
#[derive(Debug, Parser)]
#[command(name = "overload-mock")]
#[command(about = "HTTP test double that flips between healthy and overloaded on demand", long_about = None)]
pub struct MockArgs {
    /// Host or IP address to bind.
    #[arg(long, env = "OVERLOAD_MOCK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind (0 picks an ephemeral port).
    #[arg(short, long, env = "OVERLOAD_MOCK_PORT", default_value_t = 80)]
    pub port: u16,

    /// Seconds an overloaded `/` request is held before answering 503.
    #[arg(long, env = "OVERLOAD_MOCK_DELAY_SECS", default_value_t = 30)]
    pub overload_delay_secs: u64,

    /// Server-side request timeout in seconds.
    #[arg(long, env = "OVERLOAD_MOCK_REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// Start in overloaded mode.
    #[arg(long, env = "OVERLOAD_MOCK_START_OVERLOADED")]
    pub start_overloaded: bool,

    /// Default log level when RUST_LOG is unset.
    #[arg(long, env = "OVERLOAD_MOCK_LOG", default_value = "info")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, env = "OVERLOAD_MOCK_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl From<MockArgs> for MockConfig {
    fn from(args: MockArgs) -> Self {
        Self {
            listener: ListenerConfig {
                host: args.host,
                port: args.port,
            },
            overload: OverloadConfig {
                delay_secs: args.overload_delay_secs,
                start_overloaded: args.start_overloaded,
            },
            timeouts: TimeoutConfig {
                request_secs: args.request_timeout_secs,
            },
            observability: ObservabilityConfig {
                log_level: args.log_level,
                log_format: args.log_format,
            },
        }
    }
}

/// Convert parsed arguments into a validated configuration.
pub fn load_config(args: MockArgs) -> Result<MockConfig, Vec<ValidationError>> {
    let config = MockConfig::from(args);
    validate_config(&config)?;
    Ok(config)
}
