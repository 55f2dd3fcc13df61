//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use otp_enroll_core::prelude::*;
//! ```

// === Generator ===
pub use crate::generator::TotpSetupGenerator;
pub use crate::setup::{OutputKind, SetupRequest, TotpSetup};

// === Configuration ===
pub use crate::config::{EnrollConfig, GeneratorConfig, LoggingConfig};

// === Backends ===
pub use crate::encoding::{Base32Encoder, SecretEncoder};
pub use crate::qrcode_gen::{ErrorCorrection, PngQrRenderer, QrRenderer};

// === Errors ===
pub use crate::error::{SetupError, SetupResult};
