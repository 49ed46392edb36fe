//! Numeric mode encoder (Mode 0001)
//! Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits

use crate::encoder::bitstream::BitBuffer;

/// Packs decimal digits three at a time
pub struct NumericEncoder;

impl NumericEncoder {
    /// True when every character is an ASCII digit (the empty string qualifies)
    pub fn can_encode(text: &str) -> bool {
        text.bytes().all(|b| b.is_ascii_digit())
    }

    /// Pack digits into groups; returns `None` on a non-digit
    pub fn encode(text: &str) -> Option<BitBuffer> {
        if !Self::can_encode(text) {
            return None;
        }
        let mut bits = BitBuffer::new();
        for group in text.as_bytes().chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + (d - b'0') as u32);
            bits.append_bits(value, group.len() as u8 * 3 + 1);
        }
        Some(bits)
    }
}
