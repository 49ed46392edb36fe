//! Error types for QR and barcode generation.

use thiserror::Error;

use crate::models::ECLevel;

/// QR encoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// Message does not fit in the largest allowed version.
    #[error(
        "data too long: does not fit in version {max_version} at error correction level {ec_level}"
    )]
    DataTooLong {
        /// Largest version that was tried.
        max_version: u8,
        /// Requested error correction level.
        ec_level: ECLevel,
    },

    /// Version number outside 1-40.
    #[error("invalid version {0}: must be between 1 and 40")]
    InvalidVersion(u8),

    /// Minimum version greater than maximum version.
    #[error("invalid version range: min {min} exceeds max {max}")]
    InvalidVersionRange {
        /// Requested minimum version.
        min: u8,
        /// Requested maximum version.
        max: u8,
    },

    /// Mask index outside -1..=7.
    #[error("invalid mask {0}: must be -1 (auto) or between 0 and 7")]
    InvalidMask(i32),
}

/// Code 128B encoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    /// Character outside printable ASCII (32-126).
    #[error(
        "unsupported character {character:?} at position {position}: Code 128B accepts ASCII 32-126"
    )]
    UnsupportedCharacter {
        /// The offending character.
        character: char,
        /// Character index in the input.
        position: usize,
    },

    /// No bar pattern exists for a symbol value.
    #[error("no pattern for symbol value {value}")]
    MissingPattern {
        /// Symbol value that was looked up.
        value: usize,
    },
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// QR encoding failed.
    #[error(transparent)]
    Qr(#[from] QrError),

    /// Barcode encoding failed.
    #[error(transparent)]
    Barcode(#[from] BarcodeError),
}
