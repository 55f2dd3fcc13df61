//! Configuration for otp-enroll
//!
//! Values are resolved in the following order (highest priority wins):
//!
//! 1. **Environment Variables** - Override file config
//! 2. **Config File** (otp-enroll.toml) - Override defaults
//! 3. **Defaults** - Lowest priority
//!
//! # Example
//!
//! ```no_run
//! use otp_enroll_core::config::EnrollConfig;
//!
//! // Load with full supersedence
//! let config = EnrollConfig::load()?;
//!
//! // Or load from specific file
//! let config = EnrollConfig::from_file("otp-enroll.toml")?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! A config file looks like:
//!
//! ```toml
//! [generator]
//! pixels_per_module = 8
//! error_correction = "High"
//! encode_issuer = true
//!
//! [logging]
//! level = "debug"
//! ```

pub mod generator;
pub mod logging;

pub use generator::{GeneratorConfig, DEFAULT_PIXELS_PER_MODULE, MAX_PIXELS_PER_MODULE};
pub use logging::LoggingConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "otp-enroll.toml";

/// Complete otp-enroll configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollConfig {
    pub generator: GeneratorConfig,
    pub logging: LoggingConfig,
}

impl EnrollConfig {
    /// Load configuration with full supersedence chain from `otp-enroll.toml`
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a specific file, then apply environment variables
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.generator.merge(other.generator);
        self.logging.merge(other.logging);
    }

    /// Apply environment variables to configuration
    pub fn apply_env_vars(&mut self) {
        self.generator.apply_env_vars();
        self.logging.apply_env_vars();
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.generator.validate().context("Invalid [generator] section")?;
        self.logging.validate().context("Invalid [logging] section")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qrcode_gen::ErrorCorrection;

    #[test]
    fn test_default_config() {
        let config = EnrollConfig::default();
        assert_eq!(config.generator.pixels_per_module, 5);
        assert_eq!(config.generator.error_correction, ErrorCorrection::Quartile);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_validation() {
        let config = EnrollConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: EnrollConfig = toml::from_str(
            r#"
            [generator]
            error_correction = "High"
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.error_correction, ErrorCorrection::High);
        assert_eq!(config.generator.pixels_per_module, 5);
        assert!(config.generator.quiet_zone);
        assert_eq!(config.logging.level, "info");
    }
}
