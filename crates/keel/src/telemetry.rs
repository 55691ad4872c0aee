//! Tracing subscriber installation.

use keel_config::LoggingConfig;
use tracing_subscriber::EnvFilter;

use crate::error::KeelError;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "KEEL_LOG";

/// Resolve the filter: `KEEL_LOG` wins, otherwise the configured directive.
///
/// # Errors
///
/// Returns `KeelError::Tracing` if the configured directive does not parse.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, KeelError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.filter).map_err(|error| KeelError::Tracing(error.to_string()))
}

/// Install the global fmt subscriber.
///
/// # Errors
///
/// Returns `KeelError::Tracing` if the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), KeelError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .try_init()
        .map_err(|error| KeelError::Tracing(error.to_string()))
}
