//! Configuration management for the risk scoring service.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub artifacts: ArtifactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server identity and bind settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "diabetes-risk".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Where the learned parameter files live.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactConfig {
    pub scaler_path: PathBuf,
    pub model_path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from("artifacts/scaler.json"),
            model_path: PathBuf::from("artifacts/model.json"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{DIABETES_RISK_ENV}.toml (environment-specific)
    /// 3. Environment variables with DIABETES_RISK prefix
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("DIABETES_RISK_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("DIABETES_RISK").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.server.bind_address.is_empty() {
            return Err(CoreError::ConfigError(
                "server.bind_address must not be empty".into(),
            ));
        }

        if self.server.port == 0 {
            return Err(CoreError::ConfigError(
                "server.port must be greater than 0".into(),
            ));
        }

        if self.artifacts.scaler_path.as_os_str().is_empty() {
            return Err(CoreError::ConfigError(
                "artifacts.scaler_path must not be empty".into(),
            ));
        }

        if self.artifacts.model_path.as_os_str().is_empty() {
            return Err(CoreError::ConfigError(
                "artifacts.model_path must not be empty".into(),
            ));
        }

        Ok(())
    }
}
