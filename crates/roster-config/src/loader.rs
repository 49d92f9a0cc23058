//! Configuration loader with layered sources.

use crate::{AppConfig, StoreBackend};
use config::{Config, ConfigError, Environment, File};
use roster_core::RosterError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Loads application configuration from files and the environment.
///
/// Sources are applied in order, later ones overriding earlier ones:
/// 1. `config/default.toml` - Default values
/// 2. `config/{environment}.toml` - Environment-specific overrides
/// 3. `config/local.toml` - Local overrides (not committed)
/// 4. Environment variables with `ROSTER_` prefix
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a loader reading from the given directory.
    #[must_use]
    pub fn new(config_dir: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Creates a loader reading from the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> Result<AppConfig, RosterError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("ROSTER_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", self.config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", self.config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", self.config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (ROSTER_ prefix)
        builder = builder.add_source(
            Environment::with_prefix("ROSTER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_roster_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_roster_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), RosterError> {
        if config.store.backend == StoreBackend::Redis && config.store.redis_url.is_empty() {
            return Err(RosterError::Configuration(
                "store.redis_url is required for the redis backend".to_string(),
            ));
        }

        if config.store.backend == StoreBackend::Memory && config.app.environment == "production" {
            warn!("Using the in-memory store in production; records will not survive restarts");
        }

        Ok(())
    }
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::Configuration(err.to_string())
}
