//! QR data mode encoders
//!
//! This module contains the bit packers for the supported QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits, and `$%*+-./:` plus space
//! - Byte: 8-bit data (UTF-8 bytes of the message)

pub mod alphanumeric;
pub mod byte;
pub mod numeric;
