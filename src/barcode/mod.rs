//! Code 128 subset B barcodes
//!
//! - Character validation and symbol lookup
//! - Weighted mod-103 checksum
//! - SVG output with one rectangle per bar module

/// Pattern table, checksum and module string assembly
pub mod code128;
/// SVG document with bars and optional caption
pub mod svg;

pub use code128::encode_pattern;
pub use svg::BarcodeOptions;
