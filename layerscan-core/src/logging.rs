//! Structured logging setup
//!
//! Logging is process-wide and initialized once at startup. Nothing in the
//! scan path depends on it: without a subscriber the `tracing` macros are no-ops.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Unsupported log format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `config.level`. Calling this twice
/// returns [`LoggingError::Init`] rather than panicking.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .try_init()?,
        "pretty" => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_target(true))
            .try_init()?,
        other => return Err(LoggingError::UnsupportedFormat(other.to_string())),
    }

    tracing::debug!(level = %config.level, format = %config.format, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_is_rejected_before_install() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: "logfmt".to_string(),
        };

        assert!(matches!(
            init_tracing(&config),
            Err(LoggingError::UnsupportedFormat(format)) if format == "logfmt"
        ));
    }
}
