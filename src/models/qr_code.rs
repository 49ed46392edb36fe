//! Symbol parameters and the finished QR code

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::BitMatrix;
use crate::error::QrError;

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol (21x21)
    pub const MIN: Version = Version(1);
    /// Largest symbol (177x177)
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1-40
    pub fn new(number: u8) -> Result<Self, QrError> {
        if (1..=40).contains(&number) {
            Ok(Version(number))
        } else {
            Err(QrError::InvalidVersion(number))
        }
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// The next larger version, if any
    pub(crate) fn next(&self) -> Option<Version> {
        (self.0 < 40).then(|| Version(self.0 + 1))
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// All levels from weakest to strongest
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Row in the codeword/block tables
    pub fn table_index(&self) -> usize {
        match self {
            ECLevel::L => 0,
            ECLevel::M => 1,
            ECLevel::Q => 2,
            ECLevel::H => 3,
        }
    }

    /// Two-bit value stored in the format information (01=L, 00=M, 11=Q, 10=H)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        };
        f.write_str(letter)
    }
}

impl FromStr for ECLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            other => Err(format!("unknown error correction level '{other}'")),
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight candidates in index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Index 0-7, as stored in the format information
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Check if module at (row i, column j) should be flipped
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// How the mask is chosen for a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "i32")]
pub enum MaskSelection {
    /// Score all eight patterns and keep the lowest penalty
    #[default]
    Auto,
    /// Use the given pattern without searching
    Fixed(MaskPattern),
}

impl MaskSelection {
    /// Integer form used by option payloads: -1 = auto, 0-7 = fixed
    pub fn from_index(index: i32) -> Result<Self, QrError> {
        match index {
            -1 => Ok(MaskSelection::Auto),
            0..=7 => Ok(MaskSelection::Fixed(MaskPattern::ALL[index as usize])),
            other => Err(QrError::InvalidMask(other)),
        }
    }
}

impl TryFrom<i32> for MaskSelection {
    type Error = QrError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

/// Finished QR symbol
#[derive(Debug, Clone)]
pub struct QrCode {
    /// QR code version
    pub version: Version,
    /// Error correction level actually used (after any boost)
    pub error_correction: ECLevel,
    /// Mask pattern committed to the matrix
    pub mask_pattern: MaskPattern,
    /// Module matrix (true = dark, false = light)
    pub modules: BitMatrix,
}

impl QrCode {
    /// Side length in modules
    pub fn size(&self) -> usize {
        self.version.size()
    }

    /// Whether the module at (x, y) is dark; outside the symbol is light
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }
}
