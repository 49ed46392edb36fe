//! rust_qr_svg - QR code and Code 128B generation as SVG
//!
//! A pure Rust encoder producing self-contained vector documents: QR Model 2
//! symbols (versions 1-40, EC levels L/M/Q/H, numeric/alphanumeric/byte data)
//! and Code 128 subset B linear barcodes. No rasterization and no I/O.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Code 128B encoding and SVG output
pub mod barcode;
mod config;
/// QR encoding (segmentation, planning, error correction, matrix building)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QrCode, BitMatrix, Version, etc.)
pub mod models;
/// QR rendering (SVG, palette, text preview)
pub mod render;

pub use barcode::BarcodeOptions;
pub use encoder::{QrEncoder, Segment};
pub use error::{BarcodeError, Error, QrError};
pub use models::{BitMatrix, ECLevel, MaskPattern, MaskSelection, QrCode, Version};
pub use render::{PathRendering, QrOptions};

/// Message encoded when the caller passes an empty one
pub const DEFAULT_MESSAGE: &str = "hello";

/// Encode `message` as a QR code and return the SVG document
///
/// # Arguments
/// * `message` - Text to encode; empty encodes [`DEFAULT_MESSAGE`]
/// * `options` - EC level, mask, size, padding, palette and path style
///
/// # Errors
/// [`QrError::DataTooLong`] if the message does not fit version 40 at the
/// requested EC level.
///
/// ```
/// use rust_qr_svg::{qr_svg, QrOptions};
///
/// let svg = qr_svg("https://example.com", &QrOptions::default()).unwrap();
/// assert!(svg.contains("viewBox=\"0 0 160 160\""));
/// ```
pub fn qr_svg(message: &str, options: &QrOptions) -> Result<String, QrError> {
    let code = encode_qr(message, options)?;
    Ok(render::qr_svg::qr_svg_element(&code, options).to_string())
}

/// Encode `message` with the encoding-related fields of `options`, without rendering
pub fn encode_qr(message: &str, options: &QrOptions) -> Result<QrCode, QrError> {
    let message = if message.is_empty() {
        DEFAULT_MESSAGE
    } else {
        message
    };
    QrEncoder::new()
        .error_correction(options.error_correction)
        .boost_error_correction(options.boost_error_correction)
        .mask(options.mask)
        .encode_text(message)
}

/// Encode `value` as a Code 128B barcode and return the SVG document
///
/// Numbers and other displayable values are converted to text first.
///
/// # Errors
/// [`BarcodeError::UnsupportedCharacter`] if any character is outside ASCII 32-126.
pub fn barcode_svg(
    value: impl std::fmt::Display,
    options: &BarcodeOptions,
) -> Result<String, BarcodeError> {
    let text = value.to_string();
    Ok(barcode::svg::barcode_svg_element(&text, options)?.to_string())
}
