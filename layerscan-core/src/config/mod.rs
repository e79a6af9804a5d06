//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::scan::VulnType;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub logging: LoggingConfig,
}

/// Scan orchestration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Upper bound on identity resolution (in seconds); 0 disables the bound
    pub resolve_timeout_seconds: u64,
    /// Categories applied when a caller passes an empty filter
    pub default_vuln_types: Vec<VulnType>,
    /// Log a warning when a finding names a layer the image does not have
    pub warn_on_orphan_layers: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            resolve_timeout_seconds: 0,
            default_vuln_types: Vec::new(),
            warn_on_orphan_layers: true,
        }
    }
}

impl ScanConfig {
    pub fn resolve_timeout(&self) -> Option<Duration> {
        match self.resolve_timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.scan.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Local config and environment variables last (highest priority)
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("LAYERSCAN")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("scan.default_vuln_types")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Build and validate configuration from an explicit set of sources
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigLoadError> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}
