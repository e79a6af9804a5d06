//! Configuration validation module

use std::collections::HashSet;

use crate::config::{LoggingConfig, ScanConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["json", "pretty"];

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Scan configuration error: {message}")]
    Scan { message: String },

    #[error("Logging configuration error: {message}")]
    Logging { message: String },
}

impl ValidationError {
    pub fn scan(message: impl Into<String>) -> Self {
        Self::Scan {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

impl Validate for ScanConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for vuln_type in &self.default_vuln_types {
            if !seen.insert(vuln_type) {
                return Err(ValidationError::scan(format!(
                    "Duplicate default vulnerability type: {}",
                    vuln_type
                )));
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        let level = self.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ValidationError::logging(format!(
                "Log level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.level
            )));
        }

        if !LOG_FORMATS.contains(&self.format.as_str()) {
            return Err(ValidationError::logging(format!(
                "Log format must be one of {:?}, got '{}'",
                LOG_FORMATS, self.format
            )));
        }

        Ok(())
    }
}
