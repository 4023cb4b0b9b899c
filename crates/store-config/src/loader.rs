//! Configuration loader with layered sources.

use crate::app_config::default_environment;
use crate::AppConfig;
use config::{Config, ConfigError, Environment, File, Map};
use std::path::Path;
use std::sync::Arc;
use store_core::StoreError;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Environment variable selecting the configuration environment.
pub const ENVIRONMENT_VAR: &str = "STORE_ENVIRONMENT";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "STORE";

/// Configuration loader with runtime reload support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{dir}/default.toml` - Default values
    /// 2. `{dir}/{environment}.toml` - Environment-specific overrides
    /// 3. `{dir}/local.toml` - Local, uncommitted overrides
    /// 4. Environment variables with `STORE_` prefix, nested keys split
    ///    on `__` (`STORE_LOGGING__LEVEL=debug`)
    ///
    /// The environment comes from `STORE_ENVIRONMENT`, defaulting to
    /// `development`.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, StoreError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| default_environment());
        Self::with_environment(config_dir, environment)
    }

    /// Creates a loader for an explicit environment name.
    pub fn with_environment(
        config_dir: impl Into<String>,
        environment: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let config_dir = config_dir.into();
        let environment = environment.into();
        let config = Self::load_config(&config_dir, &environment)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
            environment,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, StoreError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Returns the environment this loader reads.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Reloads the configuration from disk.
    ///
    /// On failure the previously loaded configuration stays in place.
    pub async fn reload(&self) -> Result<(), StoreError> {
        let new_config = Self::load_config(&self.config_dir, &self.environment)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    fn load_config(config_dir: &str, environment: &str) -> Result<AppConfig, StoreError> {
        Self::load_config_with_env(config_dir, environment, None)
    }

    /// Loads configuration, reading overrides from `env_vars` instead of the
    /// process environment when given.
    fn load_config_with_env(
        config_dir: &str,
        environment: &str,
        env_vars: Option<Map<String, String>>,
    ) -> Result<AppConfig, StoreError> {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder()
            .set_default("app.environment", environment)
            .map_err(config_error_to_store_error)?;

        for name in ["default", environment, "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env_vars),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_store_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    fn validate_config(config: &AppConfig) -> Result<(), StoreError> {
        if config.app.name.trim().is_empty() {
            return Err(StoreError::Configuration("Application name is required".to_string()));
        }

        if !config.logging.has_known_level() {
            return Err(StoreError::Configuration(format!(
                "Unknown log level '{}'",
                config.logging.level
            )));
        }

        if config.app.is_production() && config.logging.level.eq_ignore_ascii_case("trace") {
            warn!("Trace logging enabled in production");
        }

        Ok(())
    }

    /// Gets a specific configuration value by dotted key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

fn config_error_to_store_error(err: ConfigError) -> StoreError {
    StoreError::configuration(err.to_string())
}
