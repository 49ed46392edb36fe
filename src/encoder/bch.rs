//! BCH codes protecting the format and version information
use crate::models::{ECLevel, MaskPattern, Version};

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// Fixed XOR applied so the format field is never all zeros
const FORMAT_MASK: u32 = 0x5412;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// 15-bit format information for an EC level and mask
pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((ec_level.format_bits() as u32) << 3) | mask.index() as u32;
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * FORMAT_GENERATOR);
    }
    let bits = ((data << 10) | rem) ^ FORMAT_MASK;
    assert!(bits >> 15 == 0, "format information overflowed 15 bits");
    bits as u16
}

/// 18-bit version information (only drawn for version 7 and up)
pub fn version_bits(version: Version) -> u32 {
    let data = version.number() as u32;
    let mut rem = data;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * VERSION_GENERATOR);
    }
    let bits = (data << 12) | rem;
    assert!(bits >> 18 == 0, "version information overflowed 18 bits");
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bits_mask0() {
        assert_eq!(format_bits(ECLevel::L, MaskPattern::Pattern0), 0x77C4);
        assert_eq!(format_bits(ECLevel::M, MaskPattern::Pattern0), 0x5412);
        assert_eq!(format_bits(ECLevel::Q, MaskPattern::Pattern0), 0x355F);
        assert_eq!(format_bits(ECLevel::H, MaskPattern::Pattern0), 0x1689);
    }

    #[test]
    fn test_format_bits_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for level in ECLevel::ALL {
            for mask in MaskPattern::ALL {
                assert!(seen.insert(format_bits(level, mask)));
            }
        }
        assert_eq!(seen.len(), 32);
    }

    #[test]
    fn test_version_bits() {
        assert_eq!(version_bits(Version::new(7).unwrap()), 0x07C94);
        assert_eq!(version_bits(Version::MAX) >> 12, 40);
    }
}
