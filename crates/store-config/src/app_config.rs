//! Application configuration structures.

use serde::{Deserialize, Serialize};
use store_core::LoggingConfig;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name.
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Application version.
    #[serde(default = "default_app_version")]
    pub version: String,
    /// Environment (development, staging, production).
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_app_name() -> String {
    "store".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn default_environment() -> String {
    "development".to_string()
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            environment: default_environment(),
        }
    }
}

impl AppMetadata {
    /// Returns true when running in production.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}
