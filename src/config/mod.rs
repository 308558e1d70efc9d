//! Configuration module for shipload
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`SHIPLOAD_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use shipload::config::ShiploadConfig;
//!
//! // Load defaults
//! let config = ShiploadConfig::default();
//! assert_eq!(config.weights.delay, 0.30);
//!
//! // Parse from TOML
//! let toml = r#"
//! [weights]
//! delay = 0.40
//! carrier = 0.0
//! "#;
//! let config: ShiploadConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.weights.delay, 0.40);
//! assert_eq!(config.weights.orders, 0.25);
//! ```

pub mod error;
pub mod input;
pub mod logging;
pub mod weights;

pub use error::ConfigError;
pub use input::InputConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use weights::WeightsConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for shipload.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShiploadConfig {
    /// Priority factor weights
    pub weights: WeightsConfig,
    /// Shipment file handling
    pub input: InputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ShiploadConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = std::env::var("SHIPLOAD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SHIPLOAD_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }
        if let Ok(limit) = std::env::var("SHIPLOAD_INPUT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.input.limit = l;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;

        if self.input.limit == 0 {
            return Err(ConfigError::Validation {
                field: "input.limit".to_string(),
                message: "limit must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}
