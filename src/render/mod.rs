//! Rendering of finished QR symbols

/// Palette validation and defaults
pub mod color;
/// SVG document and path data
pub mod qr_svg;
/// Plain-text preview
pub mod text;

pub use color::Palette;
pub use qr_svg::{PathRendering, QrOptions};
