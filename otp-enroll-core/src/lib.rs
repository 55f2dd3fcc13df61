//! otp-enroll - Core
//!
//! Enrollment artifacts for TOTP (RFC 6238) authenticators such as Google
//! Authenticator, Authy or 1Password.
//!
//! # Overview
//!
//! Given an issuer, an account identity and a shared secret, the
//! [`TotpSetupGenerator`] produces a [`TotpSetup`] holding:
//!
//! - the Base32 **manual setup key** a user can type in, and
//! - either a **QR code image** (PNG, as a `data:image/png;base64,` URI) or
//!   the raw **provisioning URL** (`otpauth://totp/...`) for client-side
//!   rendering.
//!
//! Computing or verifying TOTP codes and generating or storing secrets are
//! left to the caller.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use otp_enroll_core::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = EnrollConfig::load()?;
//!     otp_enroll_core::logging::init_logging(&config.logging);
//!
//!     let generator = TotpSetupGenerator::with_config(config.generator);
//!     let setup = generator.generate_base64("Acme", "bob@example.com", "s3cr3t", 5)?;
//!
//!     println!("<img src=\"{}\">", setup.qr_code_image_base64().unwrap_or_default());
//!     println!("Key: {}", setup.manual_setup_key());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`generator`] - URL construction and setup assembly
//! - [`encoding`] - Base32 manual key (`SecretEncoder` seam)
//! - [`qrcode_gen`] - QR rendering to PNG (`QrRenderer` seam)
//! - [`setup`] - Output and request types
//! - [`config`] - TOML/env configuration
//! - [`logging`] - `env_logger` initialisation for the `log` facade

pub mod config; // Configuration system with TOML support
pub mod encoding;
pub mod error;
pub mod generator;
pub mod logging;
pub mod qrcode_gen; // QR symbol + PNG rendering
pub mod setup;

pub mod prelude;

// Re-exports of main types and traits
pub use config::{EnrollConfig, GeneratorConfig, LoggingConfig, DEFAULT_PIXELS_PER_MODULE};
pub use encoding::{Base32Encoder, SecretEncoder};
pub use error::{SetupError, SetupResult};
pub use generator::TotpSetupGenerator;
pub use qrcode_gen::{generate_qr_png, ErrorCorrection, PngQrRenderer, QrRenderer};
pub use setup::{OutputKind, SetupRequest, TotpSetup, PNG_DATA_URI_PREFIX};
