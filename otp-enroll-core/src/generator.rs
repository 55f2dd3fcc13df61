//! TOTP setup generator
//!
//! Produces everything an authenticator app needs to enroll an account:
//! the Base32 manual-entry key and either a rendered QR code or the raw
//! `otpauth://` provisioning URL.
//!
//! # Example
//! ```ignore
//! use otp_enroll_core::TotpSetupGenerator;
//!
//! let generator = TotpSetupGenerator::new();
//!
//! // QR image, ready for <img src="...">
//! let setup = generator.generate_base64("Acme", "bob@example.com", "s3cr3t", 5)?;
//! assert!(setup.qr_code_image_base64().unwrap().starts_with("data:image/png;base64,"));
//!
//! // Raw URL, for rendering the QR code client-side
//! let setup = generator.generate_url("Acme", "bob@example.com", "s3cr3t")?;
//! assert_eq!(setup.manual_setup_key(), "OMZWG4RTOQ");
//! ```

use crate::config::GeneratorConfig;
use crate::encoding::{Base32Encoder, SecretEncoder};
use crate::error::{SetupError, SetupResult};
use crate::qrcode_gen::{check_pixels_per_module, PngQrRenderer, QrRenderer};
use crate::setup::{OutputKind, SetupRequest, TotpSetup, PNG_DATA_URI_PREFIX};
use log::{debug, warn};

/// Builds [`TotpSetup`] values from issuer, account and secret
///
/// The encoder and renderer are pluggable so the URL and key logic can be
/// exercised without rasterising images.
#[derive(Debug, Clone)]
pub struct TotpSetupGenerator<E = Base32Encoder, R = PngQrRenderer> {
    config: GeneratorConfig,
    encoder: E,
    renderer: R,
}

impl Default for TotpSetupGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TotpSetupGenerator {
    /// Generator with default configuration (5 px/module, level Q)
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        let renderer = PngQrRenderer::new(config.quiet_zone);
        Self { config, encoder: Base32Encoder, renderer }
    }
}

impl<E: SecretEncoder, R: QrRenderer> TotpSetupGenerator<E, R> {
    /// Generator with custom encoding and rendering backends
    pub fn with_backends(config: GeneratorConfig, encoder: E, renderer: R) -> Self {
        Self { config, encoder, renderer }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a base64 PNG QR code for authenticator apps to scan
    ///
    /// `pixels_per_module` is the edge length of one QR module in pixels.
    pub fn generate_base64(
        &self,
        issuer: &str,
        account_identity: &str,
        account_secret_key: &str,
        pixels_per_module: u32,
    ) -> SetupResult<TotpSetup> {
        self.build_setup(
            issuer,
            account_identity,
            account_secret_key,
            pixels_per_module,
            OutputKind::Image,
        )
    }

    /// Same as [`generate_base64`](Self::generate_base64) at the configured pixel size
    pub fn generate_base64_default(
        &self,
        issuer: &str,
        account_identity: &str,
        account_secret_key: &str,
    ) -> SetupResult<TotpSetup> {
        self.generate_base64(
            issuer,
            account_identity,
            account_secret_key,
            self.config.pixels_per_module,
        )
    }

    /// Generate the raw provisioning URL so the client can render its own QR code
    pub fn generate_url(
        &self,
        issuer: &str,
        account_identity: &str,
        account_secret_key: &str,
    ) -> SetupResult<TotpSetup> {
        self.build_setup(
            issuer,
            account_identity,
            account_secret_key,
            self.config.pixels_per_module,
            OutputKind::Url,
        )
    }

    /// Generate from a request whose fields may be absent
    ///
    /// Missing fields are reported in the order issuer, account identity,
    /// secret, before any encoding or rendering happens.
    pub fn generate(&self, request: &SetupRequest, kind: OutputKind) -> SetupResult<TotpSetup> {
        let issuer = request.issuer.as_deref().ok_or(SetupError::InvalidArgument("issuer"))?;
        let account_identity = request
            .account_identity
            .as_deref()
            .ok_or(SetupError::InvalidArgument("account_identity"))?;
        let account_secret_key = request
            .account_secret_key
            .as_deref()
            .ok_or(SetupError::InvalidArgument("account_secret_key"))?;
        let pixels_per_module = request.pixels_per_module.unwrap_or(self.config.pixels_per_module);

        self.build_setup(issuer, account_identity, account_secret_key, pixels_per_module, kind)
    }

    /// Provisioning URL for the given account, without building a full setup
    pub fn provisioning_url(
        &self,
        issuer: &str,
        account_identity: &str,
        account_secret_key: &str,
    ) -> String {
        let encoded_secret_key = self.encoder.encode(account_secret_key.as_bytes());
        self.format_url(issuer, &strip_whitespace(account_identity), &encoded_secret_key)
    }

    fn build_setup(
        &self,
        issuer: &str,
        account_identity: &str,
        account_secret_key: &str,
        pixels_per_module: u32,
        kind: OutputKind,
    ) -> SetupResult<TotpSetup> {
        if kind == OutputKind::Image {
            check_pixels_per_module(pixels_per_module)?;
        }

        let account_identity = strip_whitespace(account_identity);
        let encoded_secret_key = self.encoder.encode(account_secret_key.as_bytes());
        let provision_url = self.format_url(issuer, &account_identity, &encoded_secret_key);

        debug!("Generating TOTP setup ({:?}) issued by '{}'", kind, issuer);

        let setup = match kind {
            OutputKind::Image => {
                let png = self.renderer.render_png_base64(
                    &provision_url,
                    self.config.error_correction,
                    pixels_per_module,
                )?;
                TotpSetup::with_image(encoded_secret_key, format!("{}{}", PNG_DATA_URI_PREFIX, png))
            }
            OutputKind::Url => TotpSetup::with_url(encoded_secret_key, provision_url),
        };

        Ok(setup)
    }

    fn format_url(&self, issuer: &str, account_identity: &str, encoded_secret_key: &str) -> String {
        if label_breaks_url(account_identity) {
            warn!(
                "Account identity contains '?', '#', '&' or '%' and is not URL-encoded; \
                 authenticator apps may misread the provisioning URL"
            );
        }

        let issuer = if self.config.encode_issuer {
            urlencoding::encode(issuer).into_owned()
        } else {
            if needs_escaping(issuer) {
                warn!(
                    "Issuer '{}' contains reserved or non-ASCII characters and is not URL-encoded; \
                     authenticator apps may misread the provisioning URL",
                    issuer
                );
            }
            issuer.to_string()
        };

        format!("otpauth://totp/{}?secret={}&issuer={}", account_identity, encoded_secret_key, issuer)
    }
}

/// Authenticator apps reject labels with embedded whitespace
fn strip_whitespace(account_identity: &str) -> String {
    account_identity.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `+` is included since query decoders turn it into a space
fn needs_escaping(value: &str) -> bool {
    value.chars().any(|c| {
        !c.is_ascii() || c.is_whitespace() || matches!(c, '&' | '?' | '#' | '=' | '/' | '%' | '+')
    })
}

/// The label sits in the path, so only query and fragment delimiters break it
fn label_breaks_url(account_identity: &str) -> bool {
    account_identity.chars().any(|c| matches!(c, '?' | '#' | '&' | '%'))
}
