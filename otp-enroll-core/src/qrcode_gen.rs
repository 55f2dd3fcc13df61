//! QR code rendering for TOTP setup
//!
//! Builds the QR symbol with the `qrcode` crate, rasterises it to a grayscale
//! PNG with `image`, and hands it back base64 encoded. The data-URI prefix is
//! added by the generator, not here.

use crate::config::MAX_PIXELS_PER_MODULE;
use crate::error::{SetupError, SetupResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, Luma};
use qrcode::{EcLevel, QrCode};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// QR error correction level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrection {
    /// ~7% damage tolerance
    Low,
    /// ~15% damage tolerance
    Medium,
    /// ~25% damage tolerance (default, level Q)
    #[default]
    Quartile,
    /// ~30% damage tolerance
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    /// Accepts the single-letter QR names (`L`, `M`, `Q`, `H`) or the full names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(Self::Low),
            "m" | "medium" => Ok(Self::Medium),
            "q" | "quartile" => Ok(Self::Quartile),
            "h" | "high" => Ok(Self::High),
            other => Err(format!("unknown error correction level '{}'", other)),
        }
    }
}

/// Renders arbitrary text as a base64-encoded PNG QR code
pub trait QrRenderer: Send + Sync {
    fn render_png_base64(
        &self,
        text: &str,
        level: ErrorCorrection,
        pixels_per_module: u32,
    ) -> SetupResult<String>;
}

/// Default renderer backed by `qrcode` + `image`
#[derive(Debug, Clone, Copy)]
pub struct PngQrRenderer {
    /// Draw the 4-module white border around the symbol
    pub quiet_zone: bool,
}

impl Default for PngQrRenderer {
    fn default() -> Self {
        Self { quiet_zone: true }
    }
}

impl PngQrRenderer {
    pub fn new(quiet_zone: bool) -> Self {
        Self { quiet_zone }
    }
}

impl QrRenderer for PngQrRenderer {
    fn render_png_base64(
        &self,
        text: &str,
        level: ErrorCorrection,
        pixels_per_module: u32,
    ) -> SetupResult<String> {
        let png = render_png(text, level, pixels_per_module, self.quiet_zone)?;
        Ok(STANDARD.encode(png))
    }
}

/// Generate PNG bytes for a QR code holding `text`
///
/// # Example
/// ```ignore
/// let png = generate_qr_png("otpauth://totp/bob?secret=KQ&issuer=Acme", ErrorCorrection::Quartile, 5)?;
/// assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
/// ```
pub fn generate_qr_png(
    text: &str,
    level: ErrorCorrection,
    pixels_per_module: u32,
) -> SetupResult<Vec<u8>> {
    render_png(text, level, pixels_per_module, true)
}

/// Module size must be in `1..=MAX_PIXELS_PER_MODULE`; larger values overflow the renderer
pub(crate) fn check_pixels_per_module(pixels_per_module: u32) -> SetupResult<()> {
    if pixels_per_module == 0 || pixels_per_module > MAX_PIXELS_PER_MODULE {
        return Err(SetupError::InvalidArgument("pixels_per_module"));
    }
    Ok(())
}

fn render_png(
    text: &str,
    level: ErrorCorrection,
    pixels_per_module: u32,
    quiet_zone: bool,
) -> SetupResult<Vec<u8>> {
    check_pixels_per_module(pixels_per_module)?;

    let code = QrCode::with_error_correction_level(text.as_bytes(), level.into())
        .map_err(|e| SetupError::QrEncoding(e.to_string()))?;

    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(pixels_per_module, pixels_per_module)
        .quiet_zone(quiet_zone)
        .build();

    let mut png_bytes: Vec<u8> = Vec::new();
    PngEncoder::new(&mut png_bytes)
        .write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::L8)
        .map_err(|e| SetupError::ImageEncoding(e.to_string()))?;

    log::trace!(
        "Rendered QR code {}x{} px ({} px/module, {:?})",
        image.width(),
        image.height(),
        pixels_per_module,
        level
    );

    Ok(png_bytes)
}
