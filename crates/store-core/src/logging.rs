//! Logging setup built on `tracing-subscriber`.
//!
//! The filter comes from `RUST_LOG` when set, falling back to the configured
//! level. Output is either human-readable or one JSON object per line.

#[cfg(feature = "logging")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::StoreResult;
use serde::{Deserialize, Serialize};

/// Levels accepted by [`LoggingConfig::level`].
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Whether to emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,

    /// Whether to include the event target (module path).
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_with_target() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            with_target: default_with_target(),
        }
    }
}

impl LoggingConfig {
    /// Returns true if `level` is one of [`LOG_LEVELS`], ignoring case.
    #[must_use]
    pub fn has_known_level(&self) -> bool {
        LOG_LEVELS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(self.level.trim()))
    }

    /// Returns the filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_directive(&self) -> String {
        let level = self.level.trim().to_ascii_lowercase();
        format!("{level},store={level}")
    }
}

/// Installs the global tracing subscriber.
///
/// Fails with [`crate::StoreError::Internal`] if a global subscriber is
/// already installed.
#[cfg(feature = "logging")]
pub fn init_logging(config: &LoggingConfig) -> StoreResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.default_directive()))
        .map_err(|e| crate::StoreError::Configuration(format!("Invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(config.with_target),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
            .try_init()
    };

    result.map_err(|e| crate::StoreError::Internal(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!(
        level = %config.level,
        json = config.json,
        "Logging initialized"
    );

    Ok(())
}

/// Placeholder for when the logging feature is disabled.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_config: &LoggingConfig) -> StoreResult<()> {
    Ok(())
}
