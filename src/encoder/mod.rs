//! QR code encoding modules
//!
//! This module contains the whole path from text to a finished module matrix:
//! - Data segmentation and bit packing (numeric, alphanumeric, byte)
//! - Version / EC level planning and padding
//! - Reed-Solomon error correction and block interleaving
//! - Function pattern drawing, zigzag data placement and mask selection

/// BCH codes for format and version information
pub mod bch;
/// Bit buffer used while packing segments
pub mod bitstream;
/// EC block splitting and interleaving
pub mod codewords;
/// Finder, alignment, timing, format and version patterns
pub mod function_patterns;
/// Data masking
pub mod mask;
/// Module grid under construction
pub mod matrix_builder;
/// Bit packers for each data mode
pub mod modes;
/// Mask penalty rules
pub mod penalty;
/// Version and EC level selection
pub mod planner;
/// Public encoder entry point
pub mod qr_encoder;
/// Reed-Solomon generator and remainder
pub mod reed_solomon;
/// Data segments and mode classification
pub mod segment;
/// Capacity and EC block tables
pub mod tables;

pub use qr_encoder::QrEncoder;
pub use segment::{Mode, Segment};
