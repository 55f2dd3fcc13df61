//! Generator configuration

use crate::qrcode_gen::ErrorCorrection;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Default pixel size of one QR module
pub const DEFAULT_PIXELS_PER_MODULE: u32 = 5;

/// Upper bound for `pixels_per_module`; larger values produce multi-megapixel PNGs
pub const MAX_PIXELS_PER_MODULE: u32 = 64;

/// Setup generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Pixel size of one QR module when the caller does not pass one
    /// Env: OTP_ENROLL_PIXELS_PER_MODULE
    /// Default: 5
    pub pixels_per_module: u32,

    /// QR error correction level
    /// Env: OTP_ENROLL_ERROR_CORRECTION (L, M, Q or H)
    /// Default: Quartile
    pub error_correction: ErrorCorrection,

    /// Draw the white border around rendered QR codes
    /// Env: OTP_ENROLL_QUIET_ZONE
    /// Default: true
    pub quiet_zone: bool,

    /// Percent-encode the issuer inside the provisioning URL
    /// Env: OTP_ENROLL_ENCODE_ISSUER
    /// Default: false (issuer is inserted verbatim)
    pub encode_issuer: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pixels_per_module: DEFAULT_PIXELS_PER_MODULE,
            error_correction: ErrorCorrection::Quartile,
            quiet_zone: true,
            encode_issuer: false,
        }
    }
}

impl GeneratorConfig {
    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.pixels_per_module = other.pixels_per_module;
        self.error_correction = other.error_correction;
        self.quiet_zone = other.quiet_zone;
        self.encode_issuer = other.encode_issuer;
    }

    /// Apply environment variables
    ///
    /// Unparseable values are logged and leave the current setting untouched.
    pub fn apply_env_vars(&mut self) {
        if let Some(pixels) = parse_env("OTP_ENROLL_PIXELS_PER_MODULE", |v| v.parse::<u32>().ok()) {
            self.pixels_per_module = pixels;
        }

        if let Some(level) = parse_env("OTP_ENROLL_ERROR_CORRECTION", |v| v.parse::<ErrorCorrection>().ok()) {
            self.error_correction = level;
        }

        if let Some(enabled) = parse_env("OTP_ENROLL_QUIET_ZONE", parse_bool) {
            self.quiet_zone = enabled;
        }

        if let Some(enabled) = parse_env("OTP_ENROLL_ENCODE_ISSUER", parse_bool) {
            self.encode_issuer = enabled;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.pixels_per_module == 0 {
            bail!("Invalid pixels_per_module: must be at least 1");
        }

        if self.pixels_per_module > MAX_PIXELS_PER_MODULE {
            bail!(
                "Invalid pixels_per_module: {} exceeds maximum of {}",
                self.pixels_per_module,
                MAX_PIXELS_PER_MODULE
            );
        }

        Ok(())
    }
}

fn parse_env<T>(name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = env::var(name).ok()?;
    let value = parse(raw.trim());
    if value.is_none() {
        log::warn!("Ignoring {}: unrecognized value '{}'", name, raw);
    }
    value
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
