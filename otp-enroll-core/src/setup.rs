//! Enrollment data model
//!
//! [`TotpSetup`] is the value handed back to callers. It always carries the
//! manual-entry key plus exactly one QR payload: either a rendered PNG as a
//! data URI, or the raw provisioning URL for client-side rendering.

use serde::{Deserialize, Serialize, Serializer};

/// Prefix prepended to base64 PNG payloads so they can be dropped into `<img src>`
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Which QR payload a caller wants back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    /// Rendered QR code, PNG, base64 data URI
    Image,
    /// Raw `otpauth://` URL
    Url,
}

/// QR payload held by a [`TotpSetup`]. One variant per call, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
enum QrPayload {
    Image(String),
    Url(String),
}

/// Provisioning data for one TOTP enrollment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotpSetup {
    manual_setup_key: String,
    payload: QrPayload,
}

impl TotpSetup {
    pub(crate) fn with_image(manual_setup_key: String, data_uri: String) -> Self {
        Self { manual_setup_key, payload: QrPayload::Image(data_uri) }
    }

    pub(crate) fn with_url(manual_setup_key: String, url: String) -> Self {
        Self { manual_setup_key, payload: QrPayload::Url(url) }
    }

    /// Base32 secret for manual entry in an authenticator app
    pub fn manual_setup_key(&self) -> &str {
        &self.manual_setup_key
    }

    /// `data:image/png;base64,...` when image output was requested
    pub fn qr_code_image_base64(&self) -> Option<&str> {
        match &self.payload {
            QrPayload::Image(data) => Some(data),
            QrPayload::Url(_) => None,
        }
    }

    /// Raw provisioning URL when URL output was requested
    pub fn qr_code_image_content(&self) -> Option<&str> {
        match &self.payload {
            QrPayload::Url(url) => Some(url),
            QrPayload::Image(_) => None,
        }
    }

    pub fn output_kind(&self) -> OutputKind {
        match self.payload {
            QrPayload::Image(_) => OutputKind::Image,
            QrPayload::Url(_) => OutputKind::Url,
        }
    }
}

impl Serialize for TotpSetup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a> {
            manual_setup_key: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            qr_code_image_base64: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            qr_code_image_content: Option<&'a str>,
        }

        Wire {
            manual_setup_key: &self.manual_setup_key,
            qr_code_image_base64: self.qr_code_image_base64(),
            qr_code_image_content: self.qr_code_image_content(),
        }
        .serialize(serializer)
    }
}

/// Caller-supplied enrollment parameters
///
/// Every field is optional so that absent values (a JSON `null`, a missing
/// form field) reach the generator and are rejected there as
/// [`SetupError::InvalidArgument`](crate::SetupError::InvalidArgument).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupRequest {
    /// Application or company name shown in the authenticator
    #[serde(default)]
    pub issuer: Option<String>,

    /// User name or e-mail shown in the authenticator
    #[serde(default)]
    pub account_identity: Option<String>,

    /// Shared secret, encoded as Base32 for the manual key
    #[serde(default)]
    pub account_secret_key: Option<String>,

    /// Pixel size of one QR module; falls back to the generator config
    #[serde(default)]
    pub pixels_per_module: Option<u32>,
}

impl SetupRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_account_identity(mut self, account_identity: impl Into<String>) -> Self {
        self.account_identity = Some(account_identity.into());
        self
    }

    pub fn with_account_secret_key(mut self, secret: impl Into<String>) -> Self {
        self.account_secret_key = Some(secret.into());
        self
    }

    pub fn with_pixels_per_module(mut self, pixels_per_module: u32) -> Self {
        self.pixels_per_module = Some(pixels_per_module);
        self
    }
}
