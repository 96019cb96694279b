//! Tracing setup.
//!
//! Installs a `tracing-subscriber` formatter driven by the logging section of
//! the configuration. `RUST_LOG` wins over the configured level when set.
//!
//! # Usage
//!
//! ```rust,ignore
//! use journal_metrics::telemetry::init_tracing;
//!
//! let config = journal_metrics::config::load_config(None)?;
//! init_tracing(&config.observability.logging)?;
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::{LogFormat, LoggingConfig};

/// Tracing initialization errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("Invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// The underlying parse error.
        source: ParseError,
    },

    /// A global subscriber is already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Build the filter: `RUST_LOG` if set, otherwise the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|source| TelemetryError::InvalidFilter {
        directive: config.level.clone(),
        source,
    })
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the level cannot be parsed or a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    installed.map_err(|e| TelemetryError::Install(e.to_string()))
}
